use clap::Parser;
use std::env;
use std::path::{Path, PathBuf};

mod helpers;
mod mistralapi;
mod prompts;


use helpers::AnnotateError;
use prompts::{Console, LineInput};

// Family name used for the output file, regardless of the exact model id.
const OUTPUT_MODEL_NAME: &str = "mistral";

#[derive(Parser)]
struct Cli {
	/// The text file to annotate (asked for interactively when omitted)
	input: Option<PathBuf>,
	#[clap(long)]
	/// user prompt variant to use, 1-4 (asked for interactively when omitted)
	prompt: Option<String>,
	#[clap(long, default_value = "prompts")]
	/// directory holding system_prompt.txt and the user_<n>.txt variants
	prompts_dir: PathBuf,
	#[clap(long)]
	/// override the model identifier sent to the API
	model: Option<String>,
}

#[tokio::main]
async fn main() {
	let args = Cli::parse();
	if let Err(e) = run(args).await {
		eprintln!("Error: {}", e);
		std::process::exit(1);
	}
}

async fn run(args: Cli) -> Result<(), AnnotateError> {
	dotenvy::dotenv().ok();
	let api_key = env::var("MISTRAL_API_KEY")
		.map_err(|_| AnnotateError::MissingEnv("MISTRAL_API_KEY".to_string()))?;
	let api_url = env::var("MISTRAL_API_URL")
		.unwrap_or_else(|_| mistralapi::MISTRAL_API_URL.to_string());

	let mut console = Console;

	// The input file is read before anything touches the network.
	let input_path = match args.input {
		Some(path) => path,
		None => PathBuf::from(console.ask("Path of the TXT file to annotate: ")?),
	};
	let source_text = helpers::read_text_file(&input_path)?;

	let (variant, system_prompt, user_prompt) = match args.prompt.as_deref() {
		Some(choice) => {
			let variant = prompts::resolve_variant(choice).to_string();
			let system_prompt = prompts::load_system_prompt(&args.prompts_dir)?;
			let user_prompt = prompts::load_user_prompt(&args.prompts_dir, &variant)?;
			(variant, system_prompt, user_prompt)
		},
		None => prompts::select_prompt(&mut console, &args.prompts_dir)?,
	};

	let mut ctx = mistralapi::MistralContext::new(&api_url, api_key)?;
	if let Some(model_name) = args.model.as_deref() {
		ctx.set_model_name(model_name);
	}

	let messages = mistralapi::build_conversation(&system_prompt, &user_prompt, &source_text);
	println!("Requesting annotation from {}...", ctx.model_name());
	let output_path = annotate(&ctx, &variant, messages, Path::new(".")).await?;
	println!("Annotation saved to {}", output_path.display());
	Ok(())
}

/// Send the conversation and write the completion to the conventionally-named
/// output file. Nothing is written when the request fails.
async fn annotate(
	ctx: &mistralapi::MistralContext,
	variant: &str,
	messages: Vec<mistralapi::Message>,
	out_dir: &Path,
) -> Result<PathBuf, AnnotateError> {
	let annotation = ctx.call_api(messages).await?;
	let output_path = out_dir.join(format!("{}_{}_annotation.xml", OUTPUT_MODEL_NAME, variant));
	helpers::save_text_file(&output_path, &annotation)?;
	Ok(output_path)
}
