use cubefolio::content::{content_for, PanelAction, PanelBody, Presenter};
use cubefolio::face::Face;
use glam::Vec3;

#[cfg(test)]
mod content_tests {
    use super::*;

    #[test]
    fn test_up_shows_about_me_with_capstone_link() {
        let mut presenter = Presenter::new();
        presenter.update(Vec3::new(0.0, 1.0, 0.0));

        assert!(presenter.info_text.starts_with("About me:"));
        assert!(presenter.panel_visible);
        assert_eq!(
            presenter.panel_body,
            Some(PanelBody::Link {
                label: "My Senior Capstone Project",
                url: "https://ieeexplore.ieee.org/document/9092169",
            })
        );
    }

    #[test]
    fn test_down_shows_front_end_with_panel_hidden() {
        let mut presenter = Presenter::new();
        presenter.update(Vec3::new(0.0, -1.0, 0.0));

        assert!(presenter.info_text.contains("front end"));
        assert!(!presenter.panel_visible);
    }

    #[test]
    fn test_right_shows_tech_stack_list() {
        let mut presenter = Presenter::new();
        presenter.update(Vec3::new(1.0, 0.0, 0.0));

        assert!(presenter.info_text.contains("technologies"));
        assert!(presenter.panel_visible);
        match presenter.panel_body {
            Some(PanelBody::Text(list)) => {
                assert!(list.contains("JavaScript"));
                assert!(list.contains("MongoDB"));
            }
            other => panic!("expected tech list, got {:?}", other),
        }
    }

    #[test]
    fn test_left_shows_data_science_with_panel_hidden() {
        let mut presenter = Presenter::new();
        presenter.update(Vec3::new(-1.0, 0.0, 0.0));

        assert!(presenter.info_text.contains("Master's in Data Analysis"));
        assert!(!presenter.panel_visible);
    }

    #[test]
    fn test_front_shows_research_link() {
        let mut presenter = Presenter::new();
        presenter.update(Vec3::new(0.0, 0.0, 1.0));

        assert!(presenter.info_text.contains("IoT research"));
        assert!(presenter.panel_visible);
        assert_eq!(
            presenter.panel_body,
            Some(PanelBody::Link {
                label: "My IoT Research",
                url: "https://ieeexplore.ieee.org/document/9092169",
            })
        );
    }

    #[test]
    fn test_back_is_initial_view_with_panel_hidden() {
        let mut presenter = Presenter::new();
        presenter.update(Vec3::new(0.0, 0.0, -1.0));

        assert!(presenter.info_text.contains("Bachelor's in CS"));
        assert!(!presenter.panel_visible);
    }

    #[test]
    fn test_back_leaves_help_tip_in_place() {
        let mut presenter = Presenter::new();
        assert!(presenter.help_tip().is_some());

        presenter.update(Vec3::new(0.0, 0.0, -1.0));
        assert!(presenter.help_tip().is_some());
    }

    #[test]
    fn test_other_faces_dismiss_help_tip() {
        for dir in [
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, -1.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(-1.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
        ] {
            let mut presenter = Presenter::new();
            presenter.update(dir);
            assert!(presenter.help_tip().is_none(), "tip survived {:?}", dir);
        }
    }

    #[test]
    fn test_help_tip_stays_dismissed() {
        let mut presenter = Presenter::new();
        presenter.update(Vec3::new(0.0, 1.0, 0.0));
        presenter.update(Vec3::new(0.0, 0.0, -1.0));
        assert!(presenter.help_tip().is_none());
    }

    #[test]
    fn test_hidden_panel_keeps_stale_body() {
        let mut presenter = Presenter::new();
        presenter.update(Vec3::new(1.0, 0.0, 0.0));
        let shown_body = presenter.panel_body;
        assert!(presenter.panel_visible);

        // Moving to a hiding face drops only the opacity
        presenter.update(Vec3::new(0.0, -1.0, 0.0));
        assert!(!presenter.panel_visible);
        assert_eq!(presenter.panel_body, shown_body);
    }

    #[test]
    fn test_dead_zone_keeps_previous_content() {
        let mut presenter = Presenter::new();
        presenter.update(Vec3::new(0.0, 1.0, 0.0));
        let text = presenter.info_text;

        presenter.update(Vec3::new(1.0, 1.0, 1.0).normalize());
        assert_eq!(presenter.info_text, text);
        assert!(presenter.panel_visible);
    }

    #[test]
    fn test_same_direction_twice_is_a_no_op() {
        let dir = Vec3::new(0.0, 0.9, 0.0);
        let mut presenter = Presenter::new();
        presenter.update(dir);

        let (text, body, visible, dismissed) = (
            presenter.info_text,
            presenter.panel_body,
            presenter.panel_visible,
            presenter.help_tip_dismissed,
        );
        presenter.update(dir);

        assert_eq!(presenter.info_text, text);
        assert_eq!(presenter.panel_body, body);
        assert_eq!(presenter.panel_visible, visible);
        assert_eq!(presenter.help_tip_dismissed, dismissed);
    }

    #[test]
    fn test_corner_content_follows_last_match() {
        // Up then Right both match; the Right content must end up shown
        let mut presenter = Presenter::new();
        presenter.update(Vec3::new(0.85, 0.85, 0.0));
        assert_eq!(presenter.info_text, content_for(Face::Right).blurb);
        assert!(presenter.panel_visible);
    }

    #[test]
    fn test_face_content_table_is_consistent() {
        // Exactly three faces reveal the panel
        let showing = [
            Face::Up,
            Face::Down,
            Face::Right,
            Face::Left,
            Face::Front,
            Face::Back,
        ]
        .iter()
        .filter(|f| matches!(content_for(**f).panel, PanelAction::Show(_)))
        .count();
        assert_eq!(showing, 3);

        // Only the initial view leaves the help tip alone
        assert!(!content_for(Face::Back).dismisses_help_tip);
        assert!(content_for(Face::Up).dismisses_help_tip);
    }
}
