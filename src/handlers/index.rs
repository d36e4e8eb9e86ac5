// GET / handler

use std::convert::Infallible;

const INDEX_HTML: &str = include_str!("../../static/index.html");

pub async fn index_handler() -> Result<impl warp::Reply, Infallible> {
    Ok(warp::reply::html(INDEX_HTML))
}
