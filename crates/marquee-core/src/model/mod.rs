pub mod field;
pub mod genre;
pub mod ids;
pub mod movie;
pub mod record;

pub use field::MovieField;
pub use genre::Genre;
pub use ids::{GenreId, MovieId};
pub use movie::{Movie, MoviePayload};
pub use record::MovieRecord;
