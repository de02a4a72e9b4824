use glam::Vec3;

use crate::face::{facing_faces, Face};

pub const NAMEPLATE: &str = "Elyse Shackleton";
pub const HELP_TIP: &str = "Click and drag to spin the cube. Scroll to zoom.";

const IEEE_PAPER_URL: &str = "https://ieeexplore.ieee.org/document/9092169";

const BLURB_FRONT_END: &str = "I'm passionate about dreaming up unique and engaging front end \
     experiences (I also love Rubik's Cubes).";
const BLURB_ABOUT_ME: &str = "About me: I'm a math enthusiast, musician, and life-long learner. \
     Nothing fires me up like working with and learning from teammates.";
const BLURB_SOFTWARE_ENGINEERING: &str =
    "With a Bachelor's in CS and experience working as an AI development contractor for Meta \
     and Amazon, I know the scalability and modularity that is required by today's big projects.";
const BLURB_DATA_SCIENCE: &str =
    "I'm currently working towards a Master's in Data Analysis at WGU. In my contracted work \
     for Meta and Amazon, I handled data processing for training LLMs on a variety of topics, \
     including programming, data science, math, and physics.";
const BLURB_RESEARCH: &str = "My IoT research was published by the IEEE at the ICICT 2020.";
const BLURB_TECH_STACK: &str = "These are some of the technologies I'm experienced in.";

const TECH_LIST: &str = "JavaScript, ReactNative, React.js, C#/.NET, R, Python, Firebase, SQL, \
     MongoDB, Swift, Java";

/// What the supplementary panel shows when visible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelBody {
    /// Clickable link styled as a button
    Link {
        label: &'static str,
        url: &'static str,
    },
    Text(&'static str),
}

/// Effect a face has on the supplementary panel. Hiding only drops the
/// opacity; the previous body stays in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
    Show(PanelBody),
    Hide,
}

/// Static content attached to one face
pub struct FaceContent {
    pub blurb: &'static str,
    pub panel: PanelAction,
    /// Every face clears the transient help tip except the initial
    /// (-Z) view, which never touches it
    pub dismisses_help_tip: bool,
}

pub fn content_for(face: Face) -> &'static FaceContent {
    match face {
        Face::Up => &FaceContent {
            blurb: BLURB_ABOUT_ME,
            panel: PanelAction::Show(PanelBody::Link {
                label: "My Senior Capstone Project",
                url: IEEE_PAPER_URL,
            }),
            dismisses_help_tip: true,
        },
        Face::Down => &FaceContent {
            blurb: BLURB_FRONT_END,
            panel: PanelAction::Hide,
            dismisses_help_tip: true,
        },
        Face::Right => &FaceContent {
            blurb: BLURB_TECH_STACK,
            panel: PanelAction::Show(PanelBody::Text(TECH_LIST)),
            dismisses_help_tip: true,
        },
        Face::Left => &FaceContent {
            blurb: BLURB_DATA_SCIENCE,
            panel: PanelAction::Hide,
            dismisses_help_tip: true,
        },
        Face::Front => &FaceContent {
            blurb: BLURB_RESEARCH,
            panel: PanelAction::Show(PanelBody::Link {
                label: "My IoT Research",
                url: IEEE_PAPER_URL,
            }),
            dismisses_help_tip: true,
        },
        Face::Back => &FaceContent {
            blurb: BLURB_SOFTWARE_ENGINEERING,
            panel: PanelAction::Hide,
            dismisses_help_tip: false,
        },
    }
}

/// Projection of the current classification onto the overlay.
///
/// Re-evaluated every frame from the camera direction alone; applying
/// the same direction twice leaves the state unchanged.
pub struct Presenter {
    pub info_text: &'static str,
    /// Persists while the panel is hidden (stale body, opacity 0)
    pub panel_body: Option<PanelBody>,
    pub panel_visible: bool,
    pub help_tip_dismissed: bool,
}

impl Presenter {
    pub fn new() -> Self {
        Self {
            info_text: "",
            panel_body: None,
            panel_visible: false,
            help_tip_dismissed: false,
        }
    }

    /// Apply one face's content
    pub fn present(&mut self, face: Face) {
        let content = content_for(face);
        self.info_text = content.blurb;
        match content.panel {
            PanelAction::Show(body) => {
                self.panel_body = Some(body);
                self.panel_visible = true;
            }
            PanelAction::Hide => {
                self.panel_visible = false;
            }
        }
        if content.dismisses_help_tip {
            self.help_tip_dismissed = true;
        }
    }

    /// Apply every matching face in sweep order; the last match wins
    pub fn update(&mut self, dir: Vec3) {
        for face in facing_faces(dir) {
            self.present(face);
        }
    }

    pub fn help_tip(&self) -> Option<&'static str> {
        if self.help_tip_dismissed {
            None
        } else {
            Some(HELP_TIP)
        }
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}
