//! Probe command handler

use anyhow::Result;

use legacy_term::capabilities::{BackendKind, Capabilities};

/// Format capabilities and the backend `auto` would pick.
pub fn describe(caps: &Capabilities) -> String {
    let yes_no = |b: bool| if b { "yes" } else { "no" };
    format!(
        "terminal:        {}\n\
         vt sequences:    {}\n\
         legacy console:  {}\n\
         color tier:      {:?}\n\
         backend (auto):  {:?}",
        yes_no(caps.is_terminal),
        yes_no(caps.vt_supported),
        yes_no(caps.legacy_console),
        caps.color_tier,
        BackendKind::select(caps),
    )
}

/// Print detected console capabilities.
#[cfg(not(tarpaulin_include))]
pub fn handle() -> Result<()> {
    println!("{}", describe(&Capabilities::probe()));
    Ok(())
}
