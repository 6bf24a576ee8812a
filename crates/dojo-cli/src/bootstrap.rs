use anyhow::Context;

pub fn load_config() -> anyhow::Result<dojo_config::DojoConfig> {
    dojo_config::DojoConfig::load_with_dotenv()
        .context("failed to load configuration (.dojo/config.toml, DOJO_* env)")
}
