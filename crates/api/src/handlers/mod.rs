pub mod contact;
pub mod seed;
pub mod track;
pub mod video;
