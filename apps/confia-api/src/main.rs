use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = confia_api::Args::parse();
	confia_api::run(args).await
}
