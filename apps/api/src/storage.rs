//! Object storage for uploaded résumé files.

use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
#[error("failed to store object '{key}': {message}")]
pub struct StorageError {
    pub key: String,
    pub message: String,
}

#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn put(&self, key: &str, body: Bytes, content_type: &str) -> Result<(), StorageError>;
}

/// S3 (or MinIO) bucket.
#[derive(Clone)]
pub struct S3ObjectStore {
    client: aws_sdk_s3::Client,
    bucket: String,
}

impl S3ObjectStore {
    pub fn new(client: aws_sdk_s3::Client, bucket: String) -> Self {
        Self { client, bucket }
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn put(&self, key: &str, body: Bytes, content_type: &str) -> Result<(), StorageError> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(body))
            .content_type(content_type)
            .send()
            .await
            .map_err(|e| StorageError {
                key: key.to_string(),
                message: e.to_string(),
            })?;

        info!("Uploaded s3://{}/{}", self.bucket, key);
        Ok(())
    }
}

#[cfg(test)]
pub mod memory {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use super::*;

    /// Keeps objects in a map; `failing` makes every put return an error.
    #[derive(Default)]
    pub struct InMemoryObjectStore {
        pub objects: Mutex<HashMap<String, (Bytes, String)>>,
        pub failing: bool,
    }

    #[async_trait]
    impl ObjectStore for InMemoryObjectStore {
        async fn put(&self, key: &str, body: Bytes, content_type: &str) -> Result<(), StorageError> {
            if self.failing {
                return Err(StorageError {
                    key: key.to_string(),
                    message: "bucket unavailable".to_string(),
                });
            }
            self.objects
                .lock()
                .expect("object map lock poisoned")
                .insert(key.to_string(), (body, content_type.to_string()));
            Ok(())
        }
    }
}
