use std::fs::{File, OpenOptions};
use std::io::{self, Read, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnnotateError {
	#[error("IO error: {0}")]
	Io(#[from] io::Error),
	#[error("Serde error: {0}")]
	Serde(#[from] serde_json::Error),
	#[error("HTTP error: {0}")]
	Http(#[from] reqwest::Error),
	#[error("URL error: {0}")]
	Url(#[from] url::ParseError),
	#[error("Mistral API error: {0}")]
	Api(String),
	#[error("unexpected response: {0}")]
	BadResponse(String),
	#[error("environment variable {0} is not set")]
	MissingEnv(String),
	#[error("{0}")]
	FromString(String),
}

impl AnnotateError {
	pub fn msg<M: Into<String>>(msg: M) -> Self {
		AnnotateError::FromString(msg.into())
	}
}

pub fn read_text_file(path: impl AsRef<Path>) -> Result<String, AnnotateError> {
	let path = path.as_ref();
	let mut file = File::open(path)
		.map_err(|e| AnnotateError::msg(format!("cannot read {}: {}", path.display(), e)))?;
	let mut content = String::new();
	file.read_to_string(&mut content)
		.map_err(|e| AnnotateError::msg(format!("cannot read {}: {}", path.display(), e)))?;
	Ok(content)
}

pub fn save_text_file(path: impl AsRef<Path>, content: &str) -> Result<(), AnnotateError> {
	let path = path.as_ref();
	let mut file = OpenOptions::new()
		.write(true)
		.create(true)
		.truncate(true)
		.open(path)
		.map_err(|e| AnnotateError::msg(format!("cannot write {}: {}", path.display(), e)))?;
	file.write_all(content.as_bytes())
		.map_err(|e| AnnotateError::msg(format!("cannot write {}: {}", path.display(), e)))?;
	Ok(())
}

/// Print a question and read one trimmed line from stdin.
pub fn ask_line(question: &str) -> Result<String, AnnotateError> {
	print!("{}", question);
	io::stdout().flush()?;
	let mut answer = String::new();
	io::stdin().read_line(&mut answer)?;
	Ok(answer.trim().to_string())
}
