pub static BASE_STYLE: &str = r#"
@import url('https://fonts.googleapis.com/css2?family=Playfair+Display:wght@500;700&family=Poppins:wght@300;400;500&display=swap');
* {
	--blush: #f7e1dc;
	--rose: #c9707d;
	--deep-rose: #9c4a5a;
	--gold: #c9a45c;
	--ivory: #fffaf5;
	--ink: #3b2a2f;
	--muted: #8a7478;
	--success: #4caf50;
	--error: #f44336;
	--info: #2196f3;
	box-sizing: border-box;
	font-family: 'Poppins', sans-serif;
	color: var(--ink);
}
body {
	margin: 0;
	background-color: var(--ivory);
}
h1, h2, h3 {
	font-family: 'Playfair Display', serif;
}
#site-nav {
	display: flex;
	justify-content: space-between;
	align-items: center;
	padding: 16px 40px;
	background-color: white;
	box-shadow: 0 2px 12px rgba(0, 0, 0, 0.06);
}
#site-nav a {
	margin-left: 24px;
	text-decoration: none;
	color: var(--ink);
}
#site-nav a:hover {
	color: var(--rose);
	transition: color 0.2s;
}
.page {
	max-width: 1100px;
	margin: 0 auto;
	padding: 40px 20px;
}
.page-title {
	text-align: center;
	color: var(--deep-rose);
}
button {
	cursor: pointer;
	border: none;
	border-radius: 24px;
	padding: 10px 22px;
	background-color: var(--rose);
	color: white;
}
button:hover {
	background-color: var(--deep-rose);
	transition: background-color 0.2s;
}
button:disabled {
	opacity: 0.6;
	cursor: default;
}
"#;

pub static HOME_STYLE: &str = r"
#hero {
	text-align: center;
	padding: 80px 20px;
	background: linear-gradient(135deg, var(--blush), var(--ivory));
}
#hero-links a {
	display: inline-block;
	margin: 10px;
	padding: 10px 22px;
	border-radius: 24px;
	border: 1px solid var(--rose);
	text-decoration: none;
}
";

pub static NOTIFICATION_STYLE: &str = r"
.notification {
	position: fixed;
	top: 100px;
	right: 20px;
	color: white;
	padding: 15px 20px;
	border-radius: 8px;
	box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15);
	z-index: 10000;
	transition: transform 0.3s cubic-bezier(0.4, 0, 0.2, 1);
	display: flex;
	align-items: center;
	gap: 10px;
	max-width: 400px;
}
.notification * {
	color: white;
}
.notification-success {
	background: var(--success);
}
.notification-error {
	background: var(--error);
}
.notification-info {
	background: var(--info);
}
";

pub static CONTACT_STYLE: &str = r"
#contact-form {
	display: grid;
	grid-template-columns: 1fr 1fr;
	gap: 20px;
	max-width: 800px;
	margin: 0 auto;
}
.form-group {
	position: relative;
	display: flex;
	flex-direction: column;
}
.form-group.wide {
	grid-column: 1 / span 2;
}
.form-group label {
	font-size: 14px;
	color: var(--muted);
	transition: color 0.2s, transform 0.2s;
}
.form-group.focused label {
	color: var(--rose);
	transform: translateY(-2px);
}
.form-group input, .form-group select, .form-group textarea {
	padding: 10px 12px;
	border: 1px solid var(--blush);
	border-radius: 6px;
	background-color: white;
}
.form-group.success input, .form-group.success select, .form-group.success textarea {
	border-color: var(--success);
}
.form-group.error input, .form-group.error select, .form-group.error textarea {
	border-color: var(--error);
}
.submit-btn {
	grid-column: 1 / span 2;
	justify-self: center;
	position: relative;
	overflow: hidden;
}
.submit-btn .btn-glow {
	position: absolute;
	inset: 0;
	opacity: 0;
	background: radial-gradient(circle, rgba(255, 255, 255, 0.35), transparent 70%);
	transition: opacity 0.3s;
}
.submit-btn:hover .btn-glow {
	opacity: 1;
}
#faq {
	max-width: 800px;
	margin: 60px auto 0 auto;
}
.faq-item {
	border-bottom: 1px solid var(--blush);
}
.faq-question {
	display: flex;
	justify-content: space-between;
	align-items: center;
	cursor: pointer;
	padding: 16px 0;
}
.faq-toggle {
	font-size: 24px;
	color: var(--rose);
}
.faq-answer {
	overflow: hidden;
	max-height: 0;
	transition: max-height 0.3s ease;
}
";

pub static GALLERY_STYLE: &str = r"
.filter-buttons {
	display: flex;
	justify-content: center;
	flex-wrap: wrap;
	gap: 10px;
	margin-bottom: 30px;
}
.filter-btn {
	background-color: white;
	color: var(--ink);
	border: 1px solid var(--rose);
	text-transform: capitalize;
}
.filter-btn.active, .filter-btn:hover {
	background-color: var(--rose);
	color: white;
}
.gallery-grid {
	display: grid;
	grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
	gap: 20px;
}
.gallery-item {
	position: relative;
	overflow: hidden;
	border-radius: 12px;
	transition: opacity 0.3s ease, transform 0.3s ease;
}
.gallery-inner {
	opacity: 0;
	translate: 0 30px;
}
.gallery-inner.revealed {
	animation: gallery-reveal 0.6s ease both;
}
@keyframes gallery-reveal {
	from { opacity: 0; translate: 0 30px; }
	to { opacity: 1; translate: 0 0; }
}
.gallery-item img {
	width: 100%;
	height: 260px;
	object-fit: cover;
	display: block;
	transition: transform 0.3s ease;
}
.gallery-item:hover img {
	transform: scale(1.1);
}
.gallery-overlay {
	position: absolute;
	inset: 0;
	display: flex;
	flex-direction: column;
	justify-content: flex-end;
	padding: 20px;
	opacity: 0;
	background: linear-gradient(to top, rgba(59, 42, 47, 0.8), transparent);
	transition: opacity 0.3s ease;
}
.gallery-overlay * {
	color: white;
}
.gallery-item:hover .gallery-overlay {
	opacity: 1;
}
#lightbox {
	position: fixed;
	inset: 0;
	z-index: 9000;
	display: flex;
	align-items: center;
	justify-content: center;
	background-color: rgba(0, 0, 0, 0.9);
}
#lightboxImage {
	max-width: 85vw;
	max-height: 85vh;
	transition: opacity 0.3s ease;
}
.lightbox-close {
	position: absolute;
	top: 20px;
	right: 30px;
	font-size: 36px;
	background: none;
}
.lightbox-nav {
	position: absolute;
	top: 50%;
	font-size: 32px;
	background: rgba(255, 255, 255, 0.15);
}
#prevBtn {
	left: 30px;
}
#nextBtn {
	right: 30px;
}
";

pub static SERVICES_STYLE: &str = r"
.services-grid {
	display: grid;
	grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
	gap: 24px;
}
.service-card-detailed {
	background-color: white;
	border-radius: 12px;
	overflow: hidden;
	box-shadow: 0 10px 30px rgba(0, 0, 0, 0.1);
	transition: transform 0.3s ease, box-shadow 0.3s ease;
}
.service-card-detailed:hover {
	transform: translateY(-10px) scale(1.02);
	box-shadow: 0 20px 40px rgba(0, 0, 0, 0.15);
}
.service-card-detailed img {
	width: 100%;
	height: 200px;
	object-fit: cover;
}
.service-card-body {
	padding: 20px;
}
#serviceModal {
	position: fixed;
	inset: 0;
	z-index: 9000;
	overflow-y: auto;
	background-color: rgba(0, 0, 0, 0.7);
}
.modal-content {
	position: relative;
	max-width: 760px;
	margin: 60px auto;
	background-color: var(--ivory);
	border-radius: 12px;
	overflow: hidden;
}
.modal-content img {
	width: 100%;
	height: 320px;
	object-fit: cover;
}
.modal-body {
	padding: 24px 32px;
}
.modal-close {
	position: absolute;
	top: 12px;
	right: 16px;
	font-size: 28px;
	background: rgba(0, 0, 0, 0.4);
}
#modalFeaturesList {
	padding-left: 20px;
}
#modalFeaturesList li {
	margin: 6px 0;
}
#modalPrice {
	font-weight: 500;
	color: var(--deep-rose);
}
";
