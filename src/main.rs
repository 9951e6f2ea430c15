use kokodoko::Cli;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli: Cli = Cli::new_from_args();
    cli.run()
}
