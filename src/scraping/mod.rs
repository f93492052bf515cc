pub mod extract_head;
pub mod extract_meta_description;
pub mod extract_og_description;
pub mod extract_og_image;
pub mod extract_og_title;
pub mod extract_title;
