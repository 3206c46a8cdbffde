use crate::config;
use crate::events::AppEvent;
use crate::gui::strip::{self, State, StripAction};
use crate::gui::theme::{self, ThemeColors};
use crate::gui::window;
use gtk::gdk::Key;
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

pub struct AppModel {
    pub state: Rc<RefCell<State>>,
    pub visible: bool,
    pub drawing_area: gtk::DrawingArea,
}

#[derive(Debug)]
pub enum AppMsg {
    Show,
    Hide,
    Next,
    Prev,
    Page(usize),
    Count(usize),
    ConfigReload,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::Show => AppMsg::Show,
            AppEvent::Hide => AppMsg::Hide,
            AppEvent::Next => AppMsg::Next,
            AppEvent::Prev => AppMsg::Prev,
            AppEvent::Page(n) => AppMsg::Page(n),
            AppEvent::Count(n) => AppMsg::Count(n),
            AppEvent::ConfigReload => AppMsg::ConfigReload,
        }
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = (State, async_channel::Receiver<AppEvent>);
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            set_title: Some("Pager dots"),
            #[watch]
            set_visible: model.visible,
            add_css_class: "pagerdots-window",
            set_decorated: false,

            add_controller = gtk::EventControllerKey {
                connect_key_pressed[sender] => move |_, key, _, _| {
                    if key == Key::Escape {
                        sender.input(AppMsg::Hide);
                    } else if key == Key::Left || key == Key::h {
                        sender.input(AppMsg::Prev);
                    } else if key == Key::Right || key == Key::l {
                        sender.input(AppMsg::Next);
                    } else {
                        return glib::Propagation::Proceed;
                    }
                    glib::Propagation::Stop
                }
            },

            #[name = "drawing_area"]
            gtk::DrawingArea {
                add_css_class: "pagerdots-drawing-area",

                add_controller = gtk::GestureClick {
                    set_button: 0, // Listen to all buttons
                    connect_released[sender] => move |gesture, _, _, _| {
                        // primary pages forward, secondary back
                        match gesture.current_button() {
                            1 => sender.input(AppMsg::Next),
                            3 => sender.input(AppMsg::Prev),
                            _ => {}
                        }
                    }
                }
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (state, rx) = init;

        theme::load_css();
        window::init_layer_shell(&root);

        let state = Rc::new(RefCell::new(state));

        let model = AppModel {
            state: state.clone(),
            visible: true,
            drawing_area: gtk::DrawingArea::default(),
        };

        let widgets = view_output!();

        let mut model = model;
        model.drawing_area = widgets.drawing_area.clone();

        let state_draw = model.state.clone();
        widgets
            .drawing_area
            .set_draw_func(move |drawing_area, cr, width, height| {
                let style_context = drawing_area.style_context();
                let state = state_draw.borrow();
                let colors = ThemeColors::from_context(&style_context, &state.colors);
                if let Err(e) = strip::draw(cr, &state, &colors, width as f64, height as f64) {
                    log::error!("Drawing error: {}", e);
                }
            });
        model.resize();

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        let action = match msg {
            AppMsg::Show => {
                self.visible = true;
                self.state.borrow_mut().resync()
            }
            AppMsg::Hide => {
                self.visible = false;
                return;
            }
            AppMsg::Next => self.state.borrow_mut().page_forward(),
            AppMsg::Prev => self.state.borrow_mut().page_backward(),
            AppMsg::Page(page) => self.state.borrow_mut().jump(page),
            AppMsg::Count(count) => self.state.borrow_mut().set_page_count(count),
            AppMsg::ConfigReload => match config::load_config() {
                Ok(new_config) => {
                    log::info!("Configuration reloaded");
                    self.state.borrow_mut().reconfigure(&new_config)
                }
                Err(e) => {
                    log::error!("Failed to reload config: {}", e);
                    return;
                }
            },
        };
        self.handle(action);
    }
}

impl AppModel {
    fn handle(&self, action: StripAction) {
        if action.should_redraw {
            self.resize();
            self.drawing_area.queue_draw();
        }
        if action.should_animate {
            self.start_ticking();
        }
    }

    fn resize(&self) {
        let bounds = self.state.borrow().bounds();
        self.drawing_area
            .set_content_width(bounds.width.ceil() as i32 + 2 * strip::BACKDROP_PADDING as i32);
        self.drawing_area
            .set_content_height(bounds.height.ceil() as i32 + 2 * strip::BACKDROP_PADDING as i32);
    }

    /// Drives the animation from the frame clock until every tween is done.
    fn start_ticking(&self) {
        {
            let mut state = self.state.borrow_mut();
            if state.ticking {
                return;
            }
            state.ticking = true;
        }

        let state = self.state.clone();
        self.drawing_area.add_tick_callback(move |area, clock| {
            let running = state.borrow_mut().tick(clock.frame_time());
            area.queue_draw();
            if running {
                glib::ControlFlow::Continue
            } else {
                state.borrow_mut().ticking = false;
                glib::ControlFlow::Break
            }
        });
    }
}
