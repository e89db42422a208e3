use resultly::clipboard::SystemClipboard;
use resultly::i18n::{Catalog, Translations};
use resultly::presenter::{PresentationRequest, ResultPresenter};
use resultly::runtime::{Host, HostResponse, PresenterAction, Runner};
use resultly::terminal::Terminal;
use std::io;
use std::sync::Arc;

const SAMPLE_RESULTS: &[&str] = &[
    "A quiet function is a good function.\nIt does one thing and names it honestly.",
    "Prefer owning your state to borrowing trouble.",
    "Errors are values.\nTreat them like guests, not intruders.",
];

struct DemoHost {
    result_index: usize,
    is_favorite: bool,
}

impl DemoHost {
    fn request(&self) -> PresentationRequest {
        PresentationRequest::new(SAMPLE_RESULTS[self.result_index])
            .with_regenerate()
            .with_favorite(self.is_favorite)
    }
}

impl Host for DemoHost {
    fn on_action(&mut self, action: PresenterAction) -> HostResponse {
        match action {
            PresenterAction::RegenerateRequested => {
                self.result_index = (self.result_index + 1) % SAMPLE_RESULTS.len();
                HostResponse::Update(self.request())
            }
            PresenterAction::FavoriteToggleRequested => {
                self.is_favorite = !self.is_favorite;
                HostResponse::Update(self.request())
            }
        }
    }
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
    }
}

fn run() -> io::Result<()> {
    let mut catalog = Catalog::builtin();
    if let Some(path) = std::env::args().nth(1) {
        match Catalog::from_json_file(&path) {
            Ok(overlay) => catalog.merge(overlay),
            Err(e) => {
                eprintln!("Warning: ignoring catalog {}: {}", path, e);
            }
        }
    }
    let translations: Arc<dyn Translations> = Arc::new(catalog);

    let host = DemoHost {
        result_index: 0,
        is_favorite: false,
    };
    let presenter = ResultPresenter::new("result", host.request())
        .with_translations(Arc::clone(&translations))
        .with_clipboard(Box::new(SystemClipboard::new()));

    let terminal = Terminal::new()?;
    Runner::new(terminal, presenter, host).run()
}
