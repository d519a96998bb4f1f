use log::info;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let app = stagehand::default()?;
    info!("starting Stagehand");
    app.run()
}
