use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Get the project directory
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());

    // The font is looked up at runtime; make sure there is a place to drop it.
    let fonts_dir = Path::new(&manifest_dir).join("assets").join("fonts");
    if !fonts_dir.exists() {
        if let Err(e) = fs::create_dir_all(&fonts_dir) {
            println!("cargo:warning=Could not create {}: {}", fonts_dir.display(), e);
        }
    }
    if !fonts_dir.join("font.ttf").exists() {
        println!(
            "cargo:warning=No font at assets/fonts/font.ttf; panel text will be hidden until one is added"
        );
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=assets/fonts");

    link_sdl2_libraries();
}

fn link_sdl2_libraries() {
    #[cfg(target_os = "macos")]
    {
        // Homebrew installs SDL2 outside the default search path.
        if is_homebrew_available() {
            for package in ["sdl2", "sdl2_ttf"] {
                match get_homebrew_path(package) {
                    Ok(prefix) => println!("cargo:rustc-link-search={}/lib", prefix),
                    Err(e) => println!("cargo:warning={}", e),
                }
            }
        } else {
            println!("cargo:warning=Homebrew not found. Install SDL2 and SDL2_ttf manually.");
        }
    }

    #[cfg(target_os = "windows")]
    {
        println!("cargo:warning=Make sure SDL2.lib and SDL2_ttf.lib are on the library path.");
    }
}

#[cfg(target_os = "macos")]
fn is_homebrew_available() -> bool {
    std::process::Command::new("brew").arg("--version").output().is_ok()
}

#[cfg(target_os = "macos")]
fn get_homebrew_path(package: &str) -> Result<String, String> {
    match std::process::Command::new("brew").args(["--prefix", package]).output() {
        Ok(output) if output.status.success() => {
            Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
        }
        Ok(_) => Err(format!("{} not found in homebrew (brew install {})", package, package)),
        Err(e) => Err(format!("Failed to execute brew command: {}", e)),
    }
}
