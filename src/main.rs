use log::info;
use tictactoe_server::{ApiServer, DataProvider, MemoryProvider, MemoryProviderArgs, Server};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let args = MemoryProviderArgs::from_env();
    info!(
        "Initial players: {:?} [1] vs {:?} [2]",
        args.player1, args.player2
    );
    let data_provider = MemoryProvider::new(args);

    let mut server = ApiServer::from_env(data_provider);
    server.start().await
}
