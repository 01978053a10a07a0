pub mod colors;
pub mod link_opener;
pub mod share;
pub mod texture;
