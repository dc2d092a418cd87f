//! Showcase harness
//!
//! Walks through the sample notifications with narration. Narration goes
//! through the presenter; notifications go through the renderers' sink.

use std::sync::Arc;

use crate::application::ports::{OutputSink, PlatformRenderer};
use crate::application::Notification;
use crate::domain::config::RenderSettings;
use crate::domain::notification::{KindId, NotificationKind, ALL_KINDS};
use crate::domain::platform::{Platform, ALL_PLATFORMS};
use crate::infrastructure::create_renderer;

use super::args::DemoArgs;
use super::presenter::Presenter;

/// One hardcoded sample send
#[derive(Debug, Clone)]
pub struct Scenario {
    pub caption: &'static str,
    pub platform: Platform,
    pub title: &'static str,
    pub content: &'static str,
    pub kind: NotificationKind,
}

/// The three reference scenarios, in presentation order
pub fn reference_scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            caption: "Text notification on the web",
            platform: Platform::Web,
            title: "Novo Pedido",
            content: "Você tem um novo pedido",
            kind: NotificationKind::Text,
        },
        Scenario {
            caption: "Image notification on the web (the web block has no image slot)",
            platform: Platform::Web,
            title: "Promoção",
            content: "50% de desconto!",
            kind: NotificationKind::image("promo.jpg"),
        },
        Scenario {
            caption: "Video notification on mobile (fixed push icon)",
            platform: Platform::Mobile,
            title: "Tutorial",
            content: "Aprenda a usar o app",
            kind: NotificationKind::video("tutorial.mp4"),
        },
    ]
}

/// Sample payload used for each kind in the matrix
fn matrix_sample(kind: KindId) -> (&'static str, &'static str, NotificationKind) {
    match kind {
        KindId::Text => ("Lembrete", "Reunião às 15h", NotificationKind::Text),
        KindId::Image => (
            "Promoção",
            "50% de desconto!",
            NotificationKind::image("promo.jpg"),
        ),
        KindId::Video => (
            "Tutorial",
            "Aprenda a usar o app",
            NotificationKind::video("tutorial.mp4"),
        ),
    }
}

/// What a showcase run did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShowcaseReport {
    pub scenarios_sent: usize,
    pub matrix_sent: usize,
}

impl ShowcaseReport {
    pub fn total(&self) -> usize {
        self.scenarios_sent + self.matrix_sent
    }
}

/// Drives the showcase over one shared renderer per platform
pub struct Showcase<'a> {
    presenter: &'a Presenter,
    web: Arc<dyn PlatformRenderer>,
    mobile: Arc<dyn PlatformRenderer>,
    desktop: Arc<dyn PlatformRenderer>,
}

impl<'a> Showcase<'a> {
    pub fn new(
        presenter: &'a Presenter,
        settings: &RenderSettings,
        sink: Arc<dyn OutputSink>,
    ) -> Self {
        Self {
            presenter,
            web: create_renderer(Platform::Web, settings, Arc::clone(&sink)),
            mobile: create_renderer(Platform::Mobile, settings, Arc::clone(&sink)),
            desktop: create_renderer(Platform::Desktop, settings, sink),
        }
    }

    fn renderer(&self, platform: Platform) -> Arc<dyn PlatformRenderer> {
        match platform {
            Platform::Web => Arc::clone(&self.web),
            Platform::Mobile => Arc::clone(&self.mobile),
            Platform::Desktop => Arc::clone(&self.desktop),
        }
    }

    fn send(&self, platform: Platform, title: &str, content: &str, kind: NotificationKind) {
        Notification::new(self.renderer(platform), title, content, kind).send();
    }

    /// Run the parts selected by `args`
    pub fn run(&self, args: DemoArgs) -> ShowcaseReport {
        tracing::info!(
            matrix_only = args.matrix_only,
            no_matrix = args.no_matrix,
            "showcase starting"
        );
        let mut report = ShowcaseReport::default();

        self.presenter.banner("Bridge pattern: notifications x platforms");
        self.presenter.note(
            "A notification decides what to show; its renderer decides how it looks.",
        );

        if !args.matrix_only {
            report.scenarios_sent = self.run_scenarios();
        }
        if !args.no_matrix {
            report.matrix_sent = self.run_matrix();
        }

        self.summary();
        report
    }

    fn run_scenarios(&self) -> usize {
        let scenarios = reference_scenarios();
        for (i, scenario) in scenarios.iter().enumerate() {
            self.presenter.section(&format!(
                "{}. {} [{} on {}]",
                i + 1,
                scenario.caption,
                scenario.kind.id(),
                scenario.platform
            ));
            self.send(
                scenario.platform,
                scenario.title,
                scenario.content,
                scenario.kind.clone(),
            );
        }
        scenarios.len()
    }

    fn run_matrix(&self) -> usize {
        self.presenter.banner("Every kind on every platform");
        let mut sent = 0;
        for kind in ALL_KINDS {
            for platform in ALL_PLATFORMS {
                self.presenter
                    .section(&format!("{} on {} ({})", kind, platform, platform.label()));
                let (title, content, payload) = matrix_sample(*kind);
                self.send(*platform, title, content, payload);
                sent += 1;
            }
        }
        sent
    }

    fn summary(&self) {
        let kinds = ALL_KINDS.len();
        let platforms = ALL_PLATFORMS.len();
        self.presenter.banner("Why a bridge");
        self.presenter.note(&format!(
            "{} kinds + {} platforms = {} types, instead of {} x {} = {} combined classes.",
            kinds,
            platforms,
            kinds + platforms,
            kinds,
            platforms,
            kinds * platforms
        ));
        self.presenter
            .note("A new kind works on every platform; a new platform renders every kind.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::MemorySink;

    fn run(args: DemoArgs) -> (ShowcaseReport, Arc<MemorySink>) {
        let presenter = Presenter::new();
        let sink = Arc::new(MemorySink::new());
        let showcase = Showcase::new(&presenter, &RenderSettings::default(), sink.clone());
        (showcase.run(args), sink)
    }

    #[test]
    fn full_run_sends_scenarios_then_matrix() {
        let (report, sink) = run(DemoArgs::default());
        assert_eq!(report.scenarios_sent, 3);
        assert_eq!(report.matrix_sent, 9);
        assert_eq!(sink.len(), report.total());
    }

    #[test]
    fn scenarios_render_expected_blocks() {
        let (_, sink) = run(DemoArgs {
            matrix_only: false,
            no_matrix: true,
        });
        let blocks = sink.blocks();
        assert_eq!(blocks.len(), 3);
        assert!(blocks[0].contains("<h3>Novo Pedido</h3>"));
        assert!(blocks[1].contains("<p>50% de desconto!</p>"));
        assert!(!blocks[1].contains("promo.jpg"));
        assert!(blocks[2].contains("Title: Tutorial"));
        assert!(blocks[2].contains("notification_icon.png"));
    }

    #[test]
    fn matrix_only_skips_scenarios() {
        let (report, sink) = run(DemoArgs {
            matrix_only: true,
            no_matrix: false,
        });
        assert_eq!(report.scenarios_sent, 0);
        assert_eq!(sink.len(), 9);
        assert_eq!(
            sink.blocks().iter().filter(|b| b.starts_with('┌')).count(),
            3
        );
    }

    #[test]
    fn reference_scenarios_are_stable() {
        let scenarios = reference_scenarios();
        assert_eq!(scenarios[0].kind.media_url(), None);
        assert_eq!(scenarios[1].kind.media_url(), Some("promo.jpg"));
        assert_eq!(scenarios[2].platform, Platform::Mobile);
    }
}
