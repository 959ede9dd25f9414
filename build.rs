fn main() {
    #[cfg(feature = "tauri-app")]
    tauri_build::build();

    // Keep the tauri platform cfgs known to the lint when the shell feature
    // is off and tauri-build does not declare them.
    #[cfg(not(feature = "tauri-app"))]
    {
        println!("cargo:rustc-check-cfg=cfg(mobile)");
        println!("cargo:rustc-check-cfg=cfg(desktop)");
    }
}
