use crate::{DataProvider, Server};
use actix_web::{
    web::{get, Data, ServiceConfig},
    App, HttpServer,
};
use log::info;

mod handlers;
use handlers::{get_game, play, reset};

/*
Endpoints:
* GET /reset?player1=..&player2=..        -> DataProvider::reset
* GET /play?player=..[&location=row,col]  -> DataProvider::play, 400 with the message on a rejected move
* GET /game                               -> DataProvider::snapshot as json
*/

/// Registers the game routes. The app must provide a `Data<T>`.
pub fn configure<T: DataProvider + 'static>(cfg: &mut ServiceConfig) {
    cfg.route("/reset", get().to(reset::<T>))
        .route("/play", get().to(play::<T>))
        .route("/game", get().to(get_game::<T>));
}

pub struct ApiServer<T: DataProvider> {
    pub port: u16,
    pub host: String,
    pub data_provider: T,
}

impl<T: DataProvider + 'static> Server<T> for ApiServer<T> {
    type ErrorKind = std::io::Error;

    fn new(host: String, port: u16, data_provider: T) -> Self {
        Self {
            port,
            host,
            data_provider,
        }
    }

    fn get_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    fn from_env(data_provider: T) -> Self {
        let port = std::env::var("API_PORT").unwrap_or_else(|_| Self::DEFAULT_PORT.to_string());
        let host = std::env::var("API_HOST").unwrap_or_else(|_| Self::DEFAULT_HOST.to_string());
        let port = port.parse::<u16>().unwrap_or(Self::DEFAULT_PORT);
        Self::new(host, port, data_provider)
    }

    fn with_data_provider(data_provider: T) -> Self {
        Self {
            port: Self::DEFAULT_PORT,
            host: Self::DEFAULT_HOST.to_string(),
            data_provider,
        }
    }

    async fn start(&mut self) -> Result<(), std::io::Error> {
        let data_provider = self.data_provider.clone();
        info!("Starting Server on {}...", self.get_address());
        HttpServer::new(move || {
            App::new()
                .app_data(Data::new(data_provider.clone()))
                .configure(configure::<T>)
        })
        .bind(self.get_address())?
        .run()
        .await
    }
}
