//! Awaitable wrappers for the blocking decode/compress work, each bounded
//! by a caller-supplied timeout.

use std::time::Duration;

use crate::{
    domain::skin::{pack::SkinPack, shape::ShapeVariant},
    services::{compositor, pack_deserializer, pack_serializer},
    shared::{error::SkinPackError, result::AppResult},
};

pub async fn run_blocking<T, F>(operation: &'static str, timeout: Duration, job: F) -> AppResult<T>
where
    F: FnOnce() -> AppResult<T> + Send + 'static,
    T: Send + 'static,
{
    match tokio::time::timeout(timeout, tokio::task::spawn_blocking(job)).await {
        Ok(Ok(result)) => result,
        Ok(Err(err)) => Err(SkinPackError::TaskFailed(format!("{operation}: {err}"))),
        Err(_) => {
            log::warn!("{operation} did not finish within {}s", timeout.as_secs_f32());
            Err(SkinPackError::Timeout(operation))
        }
    }
}

pub async fn serialize_async(pack: SkinPack, timeout: Duration) -> AppResult<Vec<u8>> {
    run_blocking("serialize", timeout, move || pack_serializer::serialize(&pack)).await
}

pub async fn deserialize_async(bytes: Vec<u8>, timeout: Duration) -> AppResult<SkinPack> {
    run_blocking("deserialize", timeout, move || pack_deserializer::deserialize(&bytes)).await
}

pub async fn composite_async(
    texture_bytes: Vec<u8>,
    shape: ShapeVariant,
    timeout: Duration,
) -> AppResult<Vec<u8>> {
    run_blocking("composite", timeout, move || {
        compositor::composite_png(&texture_bytes, shape)
    })
    .await
}
