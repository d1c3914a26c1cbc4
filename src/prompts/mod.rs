use std::path::Path;

use crate::helpers::{self, AnnotateError};

pub const SYSTEM_PROMPT_FILE: &str = "system_prompt.txt";
pub const VARIANTS: [&str; 4] = ["1", "2", "3", "4"];
pub const DEFAULT_VARIANT: &str = "1";

// The fallback is resolved against the working directory, not the prompts
// directory. This mirrors the historical layout where a spare copy of the
// default user prompt lived next to the binary.
pub const FALLBACK_USER_PROMPT: &str = "user_1.txt";

/// Seam for interactive questions so selection logic can run without a
/// terminal attached.
pub trait LineInput {
	fn ask(&mut self, question: &str) -> Result<String, AnnotateError>;
}

pub struct Console;

impl LineInput for Console {
	fn ask(&mut self, question: &str) -> Result<String, AnnotateError> {
		helpers::ask_line(question)
	}
}

pub fn load_system_prompt(prompts_dir: &Path) -> Result<String, AnnotateError> {
	helpers::read_text_file(prompts_dir.join(SYSTEM_PROMPT_FILE))
}

/// Load the user prompt for `variant`. A variant whose file cannot be read
/// falls back to the default prompt file with a warning; a failure to read
/// the fallback itself is returned to the caller.
pub fn load_user_prompt(prompts_dir: &Path, variant: &str) -> Result<String, AnnotateError> {
	let path = prompts_dir.join(format!("user_{}.txt", variant));
	match helpers::read_text_file(&path) {
		Ok(content) => Ok(content),
		Err(_) => {
			eprintln!("User prompt {} not found, using {} instead.", path.display(), FALLBACK_USER_PROMPT);
			helpers::read_text_file(Path::new(FALLBACK_USER_PROMPT))
		},
	}
}

/// Map an answer to a valid variant identifier, substituting the default for
/// anything out of range.
pub fn resolve_variant(choice: &str) -> &str {
	if VARIANTS.contains(&choice) {
		choice
	} else {
		eprintln!("Invalid choice, using user_{}.txt.", DEFAULT_VARIANT);
		DEFAULT_VARIANT
	}
}

/// Ask which of the four user prompts to use and load the selection.
/// Returns the resolved variant identifier plus both prompt strings.
pub fn select_prompt(input: &mut dyn LineInput, prompts_dir: &Path) -> Result<(String, String, String), AnnotateError> {
	println!("Choose the user prompt:");
	for num in VARIANTS.iter() {
		println!("{}: user prompt in user_{}.txt", num, num);
	}
	let answer = input.ask("Prompt number (e.g. 1): ")?;
	let choice = resolve_variant(&answer).to_string();
	let system_prompt = load_system_prompt(prompts_dir)?;
	let user_prompt = load_user_prompt(prompts_dir, &choice)?;
	Ok((choice, system_prompt, user_prompt))
}
