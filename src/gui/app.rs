use crate::frame::{FrameClock, FrameContext};
use crate::gui::board::{BoardRenderer, CANVAS_SIZE};
use crate::gui::canvas::CairoSurface;
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

pub struct AppModel {
    pub renderer: Rc<BoardRenderer>,
    pub halted: Rc<Cell<bool>>,
}

#[derive(Debug)]
pub enum AppMsg {
    Halt(String),
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = BoardRenderer;
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            set_title: Some("Dartboard"),
            set_resizable: false,

            #[name = "drawing_area"]
            gtk::DrawingArea {
                set_content_width: CANVAS_SIZE as i32,
                set_content_height: CANVAS_SIZE as i32,
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let model = AppModel {
            renderer: Rc::new(init),
            halted: Rc::new(Cell::new(false)),
        };

        let widgets = view_output!();

        // Written by the tick callback, read by the draw function that follows it.
        let frame = Rc::new(Cell::new(FrameContext::default()));

        let clock = RefCell::new(FrameClock::new());
        let frame_tick = frame.clone();
        let halted_tick = model.halted.clone();
        widgets
            .drawing_area
            .add_tick_callback(move |area, frame_clock| {
                if halted_tick.get() {
                    return glib::ControlFlow::Break;
                }
                let next = clock.borrow_mut().tick_micros(frame_clock.frame_time());
                frame_tick.set(next);
                area.queue_draw();
                glib::ControlFlow::Continue
            });

        let renderer = model.renderer.clone();
        let halted_draw = model.halted.clone();
        widgets
            .drawing_area
            .set_draw_func(move |_, cr, _, _| {
                if halted_draw.get() {
                    return;
                }
                if let Err(e) = renderer.render(&mut CairoSurface::new(cr), &frame.get()) {
                    halted_draw.set(true);
                    sender.input(AppMsg::Halt(e.to_string()));
                }
            });

        log::info!("Animation loop started");

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        match msg {
            AppMsg::Halt(reason) => {
                log::error!("Drawing error, stopping animation: {}", reason);
                self.halted.set(true);
                relm4::main_application().quit();
            }
        }
    }
}
