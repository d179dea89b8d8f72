use lambda_http::{run, Body, Error};
use bookshelf::catalog::router::build_app;
use bookshelf::core::domain::{env_flag, Configuration};
use bookshelf::core::repository::RepositoryStore;
use bookshelf::utils::logs::setup_tracing;

// See https://docs.aws.amazon.com/lambda/latest/dg/lambda-rust.html
// https://docs.aws.amazon.com/lambda/latest/dg/images-test.html
// https://docs.aws.amazon.com/lambda/latest/dg/rust-http-events.html

// CATALOG_DEV_MODE runs against a local lambda runtime and DynamoDB Local.
// Identity is still checked unless CATALOG_STUB_IDENTITY is set as well.
#[tokio::main]
async fn main() -> Result<(), Error> {
    setup_tracing();

    let (config, store) = if env_flag("CATALOG_DEV_MODE") {
        std::env::set_var("AWS_LAMBDA_FUNCTION_NAME", "_");
        std::env::set_var("AWS_LAMBDA_FUNCTION_MEMORY_SIZE", "4096");
        std::env::set_var("AWS_LAMBDA_FUNCTION_VERSION", "1");
        std::env::set_var("AWS_LAMBDA_RUNTIME_API", "http://[::]:9000/.rt");
        (Configuration::from_env("dev"), RepositoryStore::LocalDynamoDB)
    } else {
        (Configuration::from_env("prod"), RepositoryStore::DynamoDB)
    };

    let app = build_app::<Body>(config, store).await?;

    run(app).await
}
