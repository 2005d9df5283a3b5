use csv_renderer::RendererConfig;

fn main() -> anyhow::Result<()> {
    csv_renderer::flow::run(RendererConfig::default())
}
