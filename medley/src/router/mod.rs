pub mod feed;
pub mod macros;
pub mod movies;
pub mod music;
pub mod news;
pub mod search;
pub mod social;
pub mod trending;

pub mod util;
