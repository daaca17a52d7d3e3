use dictum_models_core::paths;
use dictum_models_core::Profile;
use std::path::Path;

pub fn execute(models_dir: &Path) {
    println!("Models directory: {}\n", models_dir.display());
    println!("{:<16} {:<42} {}", "PROFILE", "REPOSITORY", "STATUS");
    println!("{}", "-".repeat(72));

    for profile in Profile::ALL {
        let status = if paths::profile_installed(models_dir, profile) {
            "installed"
        } else {
            "missing"
        };
        let name = if profile.is_default() {
            format!("{} (default)", profile)
        } else {
            profile.to_string()
        };
        println!("{:<16} {:<42} {}", name, profile.repo(), status);
    }
}
