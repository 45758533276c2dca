use pulldown_cmark::{Options, Parser};

pub fn md_to_html(input: &str) -> String {
	let events = Parser::new_ext(
		input,
		Options::ENABLE_STRIKETHROUGH | Options::ENABLE_SMART_PUNCTUATION
	);

	// Everything we render comes out of the fixtures that are compiled into this crate, so there's
	// nothing untrusted in here to sanitize
	let mut html = String::with_capacity(input.len() + input.len() / 2);
	pulldown_cmark::html::push_html(&mut html, events);

	html
}

#[cfg(test)]
mod tests {
	use super::md_to_html;

	#[test]
	fn renders_inline_markup() {
		let html = md_to_html("We work **anywhere** in the city. [Ask us](/contact)!");
		assert!(html.starts_with("<p>"));
		assert!(html.contains("<strong>anywhere</strong>"));
		assert!(html.contains(r#"<a href="/contact">Ask us</a>"#));
	}
}
