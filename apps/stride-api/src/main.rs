use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;

	let args = stride_api::Args::parse();

	stride_api::run(args).await
}
