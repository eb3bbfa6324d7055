//! Main egui application: lays out the page sections and owns the chat
//! session, the reply scheduler and the platform adapters.

use std::cell::RefCell;
use std::rc::Rc;

use egui::{self, Align, Align2, CentralPanel, RichText, ScrollArea};

use renew_core::event_bus::EventBus;
use renew_core::ports::{DelayPort, FormPort};
use renew_core::scheduler::ReplyScheduler;
use renew_core::session::{ChatSession, Submission};
use renew_platform::{FormspreeAdapter, GlooDelay};
use renew_types::config::CoachConfig;
use renew_types::content::{pricing_tiers, PricingTier};
use renew_types::CoachError;
use renew_ui::nav::NavTarget;
use renew_ui::panels::{coach, footer, hero, pricing, trust};
use renew_ui::state::{PageAction, UiState};
use renew_ui::theme;

const SECTION_GAP: f32 = 32.0;

pub struct LandingApp {
    ui_state: UiState,
    config: CoachConfig,
    event_bus: EventBus,
    session: Rc<RefCell<ChatSession>>,
    /// Dropped with the app, which cancels any reply still in flight
    scheduler: ReplyScheduler,
    delay: Rc<dyn DelayPort>,
    form: Rc<dyn FormPort>,
    tiers: Vec<PricingTier>,
    first_frame: bool,
}

impl LandingApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: CoachConfig) -> Self {
        let event_bus = EventBus::new();
        let session = ChatSession::new(config.clone(), event_bus.clone());
        let form: Rc<dyn FormPort> = Rc::new(FormspreeAdapter::new(config.form_endpoint.clone()));

        log::info!(
            "Landing page ready (reply delay {}ms, form endpoint {})",
            config.reply_delay_ms,
            form.endpoint()
        );

        Self {
            ui_state: UiState::new(config.scroll_top_threshold),
            config,
            event_bus,
            session: Rc::new(RefCell::new(session)),
            scheduler: ReplyScheduler::new(),
            delay: Rc::new(GlooDelay::new()),
            form,
            tiers: pricing_tiers(),
            first_frame: true,
        }
    }
}

impl eframe::App for LandingApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            self.first_frame = false;
        }

        // Drain events from the chat session
        let events = self.event_bus.drain();
        if !events.is_empty() {
            self.ui_state.process_events(events);
            ctx.request_repaint();
        }

        let mut actions: Vec<PageAction> = Vec::new();

        CentralPanel::default().show(ctx, |ui| {
            let mut page = ScrollArea::vertical()
                .id_salt("page")
                .auto_shrink([false, false]);
            if self.ui_state.nav.take(NavTarget::Top) {
                page = page.vertical_scroll_offset(0.0);
            }

            let output = page.show(ui, |ui| {
                let width = theme::content_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    ui.set_max_width(width);
                    ui.with_layout(egui::Layout::top_down(Align::Min), |ui| {
                        ui.add_space(SECTION_GAP);

                        // ── Hero ─────────────────────────────────────
                        actions.extend(hero::hero_panel(
                            ui,
                            &mut self.ui_state,
                            &self.config.hero_image_url,
                        ));
                        ui.add_space(SECTION_GAP);

                        // ── Trust strip ──────────────────────────────
                        trust::trust_strip(ui);
                        ui.add_space(SECTION_GAP);

                        // ── Coach demo ───────────────────────────────
                        let session = self.session.borrow();
                        let coach = ui.scope(|ui| {
                            coach::coach_panel(ui, &mut self.ui_state, session.messages())
                        });
                        drop(session);
                        actions.extend(coach.inner);
                        if self.ui_state.nav.take(NavTarget::Coach) {
                            coach.response.scroll_to_me(Some(Align::TOP));
                        }
                        ui.add_space(SECTION_GAP);

                        // ── Pricing ──────────────────────────────────
                        let pricing = ui.scope(|ui| pricing::pricing_panel(ui, &self.tiers));
                        if let Some(tier) = pricing.inner {
                            log::info!("Pricing tier selected: {}", tier);
                        }
                        if self.ui_state.nav.take(NavTarget::Pricing) {
                            pricing.response.scroll_to_me(Some(Align::TOP));
                        }
                        ui.add_space(SECTION_GAP);

                        // ── Footer ───────────────────────────────────
                        footer::footer(ui);
                        ui.add_space(SECTION_GAP);
                    });
                });
            });
            self.ui_state.nav.set_offset(output.state.offset.y);
        });

        // ── Floating scroll-to-top ───────────────────────────
        if self.ui_state.nav.show_scroll_top() {
            egui::Area::new(egui::Id::new("scroll_top"))
                .anchor(Align2::RIGHT_BOTTOM, egui::vec2(-24.0, -24.0))
                .show(ctx, |ui| {
                    let button = egui::Button::new(RichText::new("↑").color(theme::ACCENT).size(20.0))
                        .fill(theme::BG_SURFACE)
                        .stroke(egui::Stroke::new(1.0, theme::BORDER))
                        .corner_radius(theme::PILL_ROUNDING);
                    if ui.add(button).clicked() {
                        actions.push(PageAction::Navigate(NavTarget::Top));
                    }
                });
        }

        for action in actions {
            self.handle_action(action, ctx);
        }
    }
}

impl LandingApp {
    fn handle_action(&mut self, action: PageAction, ctx: &egui::Context) {
        match action {
            PageAction::Ask(text) => self.dispatch_question(text, ctx),
            PageAction::SubmitEmail => self.submit_email(),
            PageAction::Navigate(target) => {
                self.ui_state.nav.request(target);
                ctx.request_repaint();
            }
        }
    }

    /// Hand a question to the session and, if accepted, schedule the reply
    fn dispatch_question(&mut self, text: String, ctx: &egui::Context) {
        let submission = self.session.borrow_mut().submit(&text);
        self.ui_state.apply_submission(&submission);

        let Submission::Accepted(pending) = submission else {
            return;
        };

        let reply = self
            .scheduler
            .schedule(&self.session, pending, self.delay.clone());
        let repaint_ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            let turn_id = reply.turn_id();
            let outcome = reply.run().await;
            log::debug!("Coach turn {} finished: {:?}", turn_id, outcome);
            repaint_ctx.request_repaint();
        });
        ctx.request_repaint();
    }

    /// Flip the form to "submitted" and post in the background.
    /// The post outcome is only logged.
    fn submit_email(&mut self) {
        match self.ui_state.email.submit() {
            Ok(email) => {
                self.ui_state.email_error = None;
                let form = self.form.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    if let Err(e) = form.submit_email(&email).await {
                        log::warn!("Email capture post to {} failed: {}", form.endpoint(), e);
                    }
                });
            }
            Err(CoachError::AlreadySubmitted) => {}
            Err(e) => {
                log::debug!("Email capture rejected: {}", e);
                self.ui_state.email_error = Some(e.to_string());
            }
        }
    }
}
