use chatgpt_toggle::target::TargetSpec;
use chatgpt_toggle::wm::WindowManager;
use clap::Parser;
use clap::error::ErrorKind;
use std::ffi::OsString;

/// Brings the ChatGPT window forward, cycles away from it, or hides its host.
#[derive(Parser, Debug)]
#[command(name = "chatgpt-toggle", version, about, long_about = None)]
struct Cli {}

fn main() {
    env_logger::init();

    // The exit status is always 0; a hotkey press must never surface an error.
    if let Err(e) = run() {
        log::error!("{:#}", e);
    }
}

fn run() -> anyhow::Result<()> {
    if !should_toggle(std::env::args_os()) {
        return Ok(());
    }

    let target = TargetSpec::default();
    let wm = platform_wm();

    let outcome = chatgpt_toggle::toggle(wm.as_ref(), &target);
    if outcome.result.success {
        log::info!("{}: ok", outcome.action);
    } else {
        log::warn!("{} failed: {}", outcome.action, outcome.result.stderr);
    }
    Ok(())
}

/// False only when clap already answered the invocation with help or version
/// text. Anything else on the command line is ignored.
fn should_toggle<I, T>(args: I) -> bool
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(_) => true,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                if let Err(io) = e.print() {
                    log::warn!("Failed to print: {}", io);
                }
                false
            }
            kind => {
                log::warn!("Ignoring arguments: {:?}", kind);
                true
            }
        },
    }
}

#[cfg(target_os = "linux")]
fn platform_wm() -> Box<dyn WindowManager> {
    Box::new(chatgpt_toggle::wm::HyprlandWm::new())
}

#[cfg(not(target_os = "linux"))]
fn platform_wm() -> Box<dyn WindowManager> {
    Box::new(chatgpt_toggle::wm::AppleScriptWm::new())
}
