use menger_video::{Lighting, RenderConfig};

#[cfg(test)]
mod preset_tests {
    use super::*;

    #[test]
    fn test_showcase_defaults() {
        let config = RenderConfig::default();
        assert_eq!(config.width, 1920);
        assert_eq!(config.height, 1080);
        assert_eq!(config.frame_count, 240);
        assert_eq!(config.fps, 30);
        assert_eq!(config.sponge_size, 4.0);
        assert_eq!(config.sponge_level, 4);
        assert_eq!(config.camera_distance, 10.0);
        assert_eq!(config.rotation_axis, [0.0, 1.0, 1.0]);
        assert_eq!(config.transparency, 1.0);
        match &config.lighting {
            Lighting::Symmetric {
                positions,
                intensity,
            } => {
                assert_eq!(positions.len(), 6);
                assert_eq!(*intensity, 0.6);
                assert!(positions.contains(&[10.0, 0.0, 0.0]));
                assert!(positions.contains(&[0.0, 0.0, -10.0]));
            }
            other => panic!("showcase preset should be symmetric, got {:?}", other),
        }
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_logo_preset() {
        let config = RenderConfig::logo();
        assert_eq!(config.sponge_size, 2.0);
        assert_eq!(config.camera_distance, 8.0);
        assert_eq!(config.rotation_axis, [0.0, 1.0, 0.0]);
        assert_eq!(config.object_color, [0.5, 0.5, 1.0]);
        assert_eq!(config.background_color, [0.0, 0.0, 0.0]);
        assert_eq!(
            config.lighting,
            Lighting::Single {
                position: [-5.0, -5.0, -5.0]
            }
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_angle_step_covers_full_turn() {
        let config = RenderConfig::default();
        let total = config.angle_step() * config.frame_count as f32;
        assert!((total - std::f32::consts::TAU).abs() < 1e-4);
    }
}

#[cfg(test)]
mod serde_tests {
    use super::*;

    #[test]
    fn test_json_round_trip() {
        let config = RenderConfig::logo();
        let json = serde_json::to_string(&config).unwrap();
        let back: RenderConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config: RenderConfig =
            serde_json::from_str(r#"{"width": 640, "height": 360, "frame_count": 12}"#).unwrap();
        assert_eq!(config.width, 640);
        assert_eq!(config.height, 360);
        assert_eq!(config.frame_count, 12);
        assert_eq!(config.fps, 30, "unspecified fields keep their defaults");
        assert_eq!(config.sponge_level, 4);
    }

    #[test]
    fn test_negative_level_rejected_at_parse_time() {
        let result: Result<RenderConfig, _> =
            serde_json::from_str(r#"{"sponge_level": -1}"#);
        assert!(result.is_err(), "negative recursion level must not parse");
    }

    #[test]
    fn test_lighting_variants_round_trip() {
        let single = Lighting::Single {
            position: [1.0, 2.0, 3.0],
        };
        let json = serde_json::to_string(&single).unwrap();
        assert!(json.contains("single"));
        assert_eq!(serde_json::from_str::<Lighting>(&json).unwrap(), single);
    }
}

#[cfg(test)]
mod validation_tests {
    use super::*;

    fn base() -> RenderConfig {
        RenderConfig::default()
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        let mut config = base();
        config.width = 0;
        assert!(config.validate().is_err());

        let mut config = base();
        config.height = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_frame_count_rejected() {
        let mut config = base();
        config.frame_count = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_fps_rejected() {
        let mut config = base();
        config.fps = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_non_positive_sponge_size_rejected() {
        let mut config = base();
        config.sponge_size = 0.0;
        assert!(config.validate().is_err());
        config.sponge_size = -4.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_non_positive_camera_distance_rejected() {
        let mut config = base();
        config.camera_distance = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_out_of_range_transparency_rejected() {
        let mut config = base();
        config.transparency = 1.5;
        assert!(config.validate().is_err());
        config.transparency = -0.1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_or_oversized_light_set_rejected() {
        let mut config = base();
        config.lighting = Lighting::Symmetric {
            positions: vec![],
            intensity: 0.6,
        };
        assert!(config.validate().is_err());

        config.lighting = Lighting::Symmetric {
            positions: vec![[0.0, 0.0, 1.0]; 7],
            intensity: 0.6,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_negative_intensity_rejected() {
        let mut config = base();
        config.lighting = Lighting::Symmetric {
            positions: vec![[1.0, 0.0, 0.0]],
            intensity: -0.5,
        };
        assert!(config.validate().is_err());
    }
}
