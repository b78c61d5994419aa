mod requests;
mod types;

pub use requests::CreateAnimeRequest;
pub use types::{generate_anime_id, Anime};
