use figment::Jail;
use gx_config::GradexConfig;

#[test]
fn env_vars_fill_config_values() {
    Jail::expect_with(|jail| {
        jail.set_env("GRADEX_CANVAS__BASE_URL", "https://env.instructure.com");
        jail.set_env("GRADEX_CANVAS__PER_PAGE", "25");
        jail.set_env("GRADEX_EXPORT__INCLUDE_UNGRADED", "true");

        let config = GradexConfig::load().expect("config loads");
        assert_eq!(config.canvas.base_url, "https://env.instructure.com");
        assert_eq!(config.canvas.per_page, 25);
        assert!(config.export.include_ungraded);
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_dir(".gradex")?;
        jail.create_file(
            ".gradex/config.toml",
            r#"
[canvas]
base_url = "https://file.instructure.com"
access_token = "from-file"
"#,
        )?;
        jail.set_env("GRADEX_CANVAS__ACCESS_TOKEN", "from-env");

        let config = GradexConfig::load().expect("config loads");
        assert_eq!(config.canvas.base_url, "https://file.instructure.com");
        assert_eq!(config.canvas.access_token, "from-env");
        Ok(())
    });
}
