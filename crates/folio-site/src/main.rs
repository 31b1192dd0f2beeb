use folio_platform::{HeadlessConfig, HeadlessRunner};
use folio_site::content;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cfg = HeadlessConfig::from_env()?.with_title(content::TITLE);
    let dump_scene = cfg.dump_scene;

    let report = HeadlessRunner::new(cfg).run(folio_site::app);

    log::info!(
        "'{}': {} frames, scrolled {:.0}px, {} hyperlinks on the page",
        report.title,
        report.frames,
        report.scrolled,
        report.links.len(),
    );
    for link in &report.links {
        log::debug!("link '{}' -> {}", link.label, link.href);
    }

    if dump_scene {
        println!("{}", serde_json::to_string_pretty(&report.scene)?);
    }

    Ok(())
}
