//! Simulated single-channel oscilloscope behind an MCP6S21 programmable-gain amplifier.

fn main() -> anyhow::Result<()> {
    env_logger::init();
    gainscope::run_daq_scope().map_err(|e| anyhow::anyhow!("scope window failed: {e}"))
}
