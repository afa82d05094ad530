use movie_recommender::app;
use movie_recommender::error::AppError;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    app::run().await
}
