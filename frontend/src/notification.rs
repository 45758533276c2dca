use std::rc::Rc;
use gloo_console::log;
use gloo_timers::future::TimeoutFuture;
use site_data::{
	NoticeKind,
	Notifier,
	timing::{NOTICE_DISPLAY_MS, NOTICE_ENTER_DELAY_MS, NOTICE_EXIT_MS}
};
use yew::prelude::*;

#[derive(Debug)]
pub enum NoticeMsg {
	Show(String, NoticeKind),
	Reveal(u64),
	Retire(u64),
	Remove(u64)
}

#[derive(Clone, Default, PartialEq)]
pub struct NoticeBoard(Notifier);

impl Reducible for NoticeBoard {
	type Action = NoticeMsg;

	fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
		let mut board = (*self).clone();

		match action {
			NoticeMsg::Show(message, kind) => {
				board.0.show(message, kind);
			},
			NoticeMsg::Reveal(id) => board.0.reveal(id),
			NoticeMsg::Retire(id) => board.0.retire(id),
			NoticeMsg::Remove(id) => board.0.remove(id)
		}

		board.into()
	}
}

/// Handed down through context so any page can pop up a notification
#[derive(Clone, PartialEq)]
pub struct Notify(Option<UseReducerDispatcher<NoticeBoard>>);

impl Notify {
	pub fn show(&self, message: impl Into<String>, kind: NoticeKind) {
		let message = message.into();
		match &self.0 {
			Some(dispatcher) => dispatcher.dispatch(NoticeMsg::Show(message, kind)),
			None => log!(format!("No notification provider to show '{message}'"))
		}
	}
}

#[hook]
pub fn use_notify() -> Notify {
	use_context::<Notify>().unwrap_or(Notify(None))
}

#[derive(Properties, PartialEq)]
pub struct NotificationProps {
	pub children: Children
}

#[function_component(NotificationProvider)]
pub fn notification_provider(props: &NotificationProps) -> Html {
	let board = use_reducer_eq(NoticeBoard::default);
	let notify = Notify(Some(board.dispatcher()));

	// Each notice gets its own timeline when it shows up. If it's been replaced by the time a step
	// fires, the board just ignores that step
	{
		let dispatcher = board.dispatcher();
		use_effect_with(board.0.current().map(|n| n.id), move |id| {
			if let Some(id) = *id {
				wasm_bindgen_futures::spawn_local(async move {
					TimeoutFuture::new(NOTICE_ENTER_DELAY_MS).await;
					dispatcher.dispatch(NoticeMsg::Reveal(id));

					TimeoutFuture::new(NOTICE_DISPLAY_MS - NOTICE_ENTER_DELAY_MS).await;
					dispatcher.dispatch(NoticeMsg::Retire(id));

					TimeoutFuture::new(NOTICE_EXIT_MS).await;
					dispatcher.dispatch(NoticeMsg::Remove(id));
				});
			}

			|| ()
		});
	}

	let notice_html = board.0.current().map(|notice| html! {
		<div
			key={ notice.id.to_string() }
			class={ notice.kind.class() }
			style={ notice.phase.transform() }
		>
			<span class="notification-icon">{ notice.kind.icon() }</span>
			<span class="notification-message">{ &notice.message }</span>
		</div>
	}).unwrap_or_default();

	html! {
		<>
			<style>{ site_data::NOTIFICATION_STYLE }</style>
			<ContextProvider<Notify> context={ notify }>
				{ for props.children.iter() }
			</ContextProvider<Notify>>
			{ notice_html }
		</>
	}
}
