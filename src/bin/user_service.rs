use ecommerce_microservices::server;
use ecommerce_microservices::util::init_logging;

#[tokio::main]
async fn main() {
    init_logging("user-service");

    server::run("User service", "User service running").await;
}
