#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    limelight_ui::run_native_demo()
}

#[cfg(target_arch = "wasm32")]
fn main() {}
