mod create_movie;
mod delete_movie;
mod get_movie;
mod get_movie_list;
mod repository;
mod types;
mod update_movie;
mod util;

pub use create_movie::*;
pub use delete_movie::*;
pub use get_movie::*;
pub use get_movie_list::*;
pub use repository::*;
pub use types::*;
pub use update_movie::*;
pub use util::*;

use actix_web::{web, Scope};

pub fn movie_source() -> Scope {
    web::scope("/api/movies")
        .route("", web::get().to(get_movie_list))
        .route("", web::post().to(create_movie))
        .route("/{movie_id}", web::get().to(get_movie))
        .route("/{movie_id}", web::put().to(update_movie))
        .route("/{movie_id}", web::delete().to(delete_movie))
}
