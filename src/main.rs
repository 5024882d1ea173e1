use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use post_workflow::cli::{apply_steps, parse_steps};
use post_workflow::{create_post_span, generate_correlation_id, init_telemetry, Post, PostWorkflowConfig};

#[derive(Parser)]
#[command(name = "post-workflow")]
#[command(about = "Drive a blog post through draft, review and publication")]
#[command(long_about = "Applies each STEP to a fresh draft post in order, then prints the content \
                       a reader would see. Content stays empty until the post is published.")]
struct Cli {
    /// Configuration file (defaults to ./post-workflow.toml when present)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print a JSON snapshot of the post instead of its visible content
    #[arg(long)]
    json: bool,

    /// Steps to apply: add:<text>, review, approve, reject
    #[arg(value_name = "STEP")]
    steps: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    PostWorkflowConfig::load_env_file()?;
    let config = PostWorkflowConfig::load(cli.config.as_deref())?;
    init_telemetry(&config.observability)?;

    let steps = parse_steps(&cli.steps)?;

    let mut post = Post::with_policy(config.workflow.clone());
    let correlation_id = generate_correlation_id();
    let span = create_post_span("apply_steps", post.id(), Some(&correlation_id));
    span.in_scope(|| {
        tracing::info!(steps = steps.len(), "Applying steps");
        apply_steps(&mut post, steps);
        tracing::info!(status = %post.status(), "Steps applied");
    });

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&post.snapshot())?);
    } else {
        println!("{}", post.content());
    }
    Ok(())
}
