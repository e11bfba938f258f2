use crate::DataProvider;

use actix_web::{
    http::header::ContentType,
    web::{Data, Query},
    HttpResponse,
};
use log::{error, warn};
use serde::Deserialize;
use serde_json::to_string;

#[derive(Deserialize)]
pub struct ResetQuery {
    #[serde(default)]
    player1: String,
    #[serde(default)]
    player2: String,
}

#[derive(Deserialize)]
pub struct PlayQuery {
    #[serde(default)]
    player: String,
    location: Option<String>,
}

pub async fn reset<T: DataProvider>(query: Query<ResetQuery>, game: Data<T>) -> HttpResponse {
    let board = game.reset(&query.player1, &query.player2);
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(board)
}

pub async fn play<T: DataProvider>(query: Query<PlayQuery>, game: Data<T>) -> HttpResponse {
    // an empty location means "just show me the board"
    let location = query.location.as_deref().filter(|l| !l.is_empty());

    match game.play(&query.player, location) {
        Ok(board) => HttpResponse::Ok()
            .content_type(ContentType::plaintext())
            .body(board),
        Err(err) => {
            warn!(
                "rejected move by {:?} at {:?}: {}",
                query.player, location, err
            );
            HttpResponse::BadRequest()
                .content_type(ContentType::plaintext())
                .body(err.to_string())
        }
    }
}

pub async fn get_game<T: DataProvider>(game: Data<T>) -> HttpResponse {
    match to_string(&game.snapshot()) {
        Ok(body) => HttpResponse::Ok()
            .content_type(ContentType::json())
            .body(body),
        Err(err) => {
            error!("could not serialize game: {}", err);
            HttpResponse::InternalServerError().finish()
        }
    }
}
