use thiserror::Error;

/// 导入错误。剧本内容本身不会导致失败，只有输入或配置读取失败才会报错
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("无效的配置: {0}")]
    Config(#[from] serde_json::Error),
}

pub type ImportResult<T> = Result<T, ImportError>;
