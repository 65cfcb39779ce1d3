//! Widget content that runs on a ticker

use classboard_desktop::{BoardEngine, Payload, WidgetId};
use classboard_widgets::{Stopwatch, Ticker, WidgetContent};

/// Content model and ticker of a widget with periodic work.
///
/// The model holds in-flight state (seconds left, elapsed time) that is
/// only written to the widget payload on transitions.
pub(crate) struct LiveContent {
    ticker: Ticker,
    content: WidgetContent,
}

impl LiveContent {
    /// Start ticking `id`, registering the ticker's handle with the board.
    /// `None` for unknown widgets and content without periodic work.
    pub fn start(engine: &mut BoardEngine, id: &WidgetId) -> Option<Self> {
        let content = WidgetContent::from_instance(engine.widgets.get(id)?);
        let ticker = Ticker::new(content.tick_interval_ms()?);
        engine.attach_content(id, Box::new(ticker.handle()));
        Some(Self { ticker, content })
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.ticker.is_cancelled()
    }

    /// Advance by `elapsed_ms`, returning a patch when a transition happened
    pub fn advance(&mut self, elapsed_ms: f64) -> Option<Payload> {
        let fired = self.ticker.advance(elapsed_ms);
        if fired == 0 {
            return None;
        }
        match &mut self.content {
            WidgetContent::Countdown(timer) => timer.advance(fired),
            WidgetContent::Stopwatch(watch) => {
                watch.tick(u64::from(fired) * u64::from(Stopwatch::TICK_MS));
                None
            }
            _ => None,
        }
    }

    /// Current state including in-flight values
    pub fn payload(&self) -> Payload {
        self.content.to_payload()
    }

    /// Re-read the model after the payload changed from outside
    pub fn reload(&mut self, payload: &Payload) {
        let kind = self.content.kind();
        self.content = WidgetContent::from_payload(&kind, payload);
        self.ticker.restart();
    }
}
