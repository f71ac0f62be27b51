#[cfg(test)]
mod tests {
    use super::super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.services.uniprot_base_url, "https://www.uniprot.org/uniprot");
        assert_eq!(config.services.alphafold_base_url, "https://alphafold.ebi.ac.uk");
        assert_eq!(config.services.model_version, "v2");
        assert_eq!(config.dssp.executable, "mkdssp");
        assert_eq!(config.dssp.scratch_dir, ".");
        assert_eq!(config.workspace.path, ".");
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config = Config::parse(
            r#"
            [dssp]
            executable = "/opt/dssp/bin/mkdssp"
            "#,
        )
        .unwrap();
        assert_eq!(config.dssp.executable, "/opt/dssp/bin/mkdssp");
        assert_eq!(config.dssp.scratch_dir, ".");
        assert_eq!(config.services.model_version, "v2");
    }

    #[test]
    fn test_full_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("foldfetch.toml");
        std::fs::write(
            &path,
            r#"
            [services]
            uniprot_base_url = "https://rest.uniprot.org/uniprotkb"
            alphafold_base_url = "https://mirror.example.org/alphafold"
            model_version = "v4"

            [dssp]
            executable = "dssp"
            scratch_dir = "/tmp"

            [workspace]
            path = "./models"
            "#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.services.uniprot_base_url, "https://rest.uniprot.org/uniprotkb");
        assert_eq!(config.services.alphafold_base_url, "https://mirror.example.org/alphafold");
        assert_eq!(config.services.model_version, "v4");
        assert_eq!(config.dssp.scratch_dir, "/tmp");
        assert_eq!(config.workspace.path, "./models");
    }

    #[test]
    fn test_invalid_toml_is_error() {
        assert!(Config::parse("[dssp\nexecutable = ").is_err());
    }

    #[test]
    fn test_missing_file_is_error_for_load_from() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load_from(&dir.path().join("absent.toml")).is_err());
    }
}
