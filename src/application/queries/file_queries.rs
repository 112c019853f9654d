//! File Queries

use crate::domain::clone::FilePurpose;

/// 列出已上传文件
#[derive(Debug, Clone, Default)]
pub struct ListFiles {
    pub purpose: Option<FilePurpose>,
}

/// 查询单个文件详情
#[derive(Debug, Clone)]
pub struct GetFileInfo {
    pub file_id: String,
}
