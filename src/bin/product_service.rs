use ecommerce_microservices::server;
use ecommerce_microservices::util::init_logging;

#[tokio::main]
async fn main() {
    init_logging("product-service");

    server::run("Product service", "Product service running").await;
}
