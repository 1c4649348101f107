use std::path::Path;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, ReadContentError>;

pub(crate) async fn read_content<P: AsRef<Path>>(file_path: P) -> Result<String> {
    let file_path = file_path.as_ref();
    let is_file = tokio::fs::metadata(file_path)
        .await
        .is_ok_and(|metadata| metadata.is_file());
    if !is_file {
        return Err(ReadContentError::PathIsNotAFile(file_path.to_path_buf()));
    }

    let bytes = tokio::fs::read(file_path)
        .await
        .map_err(|err| ReadContentError::FileReadError {
            file_path: file_path.to_path_buf(),
            err,
        })?;

    let content = String::from_utf8(bytes)
        .map_err(|err| ReadContentError::FileDecodeError {
            file_path: file_path.to_path_buf(),
            err,
        })?;

    Ok(content)
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum ReadContentError {
    #[error("{file_path:?} is not valid UTF-8: {err}")]
    FileDecodeError {
        file_path: PathBuf,
        err: std::string::FromUtf8Error,
    },

    #[error("Failed to read {file_path:?}: {err}")]
    FileReadError {
        file_path: PathBuf,
        err: std::io::Error,
    },

    #[error("{0:?} is not a file")]
    PathIsNotAFile(PathBuf),
}
