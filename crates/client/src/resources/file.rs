use crate::error::ClientResult;
use crate::gateway::Gateway;

pub struct FileApi;

impl FileApi {
    /// Upload a file and return its public URL (`/uploads/...`).
    pub async fn upload(gateway: &Gateway, file_name: &str, bytes: Vec<u8>) -> ClientResult<String> {
        gateway.upload("/file/upload", file_name, bytes).await
    }

    pub async fn download(gateway: &Gateway, file_name: &str) -> ClientResult<Vec<u8>> {
        gateway.download(&format!("/file/download/{file_name}")).await
    }
}
