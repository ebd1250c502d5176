use axum::{
    http::header,
    response::IntoResponse,
    routing::get,
    Router,
};

pub fn create_static_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/static/css/main.css", get(serve_main_css))
}

async fn serve_main_css() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css")], MAIN_CSS)
}

const MAIN_CSS: &str = r#"
:root {
    --primary: #FF5470;
    --secondary: #5FB3FC;
    --accent: #FFBF47;
    --dark: #232323;
    --light: #F7F7F9;
    --success: #36D39A;
    --shadow-offset: 4px;
}

* {
    box-sizing: border-box;
}

body {
    font-family: 'Inter', system-ui, sans-serif;
    background-color: var(--light);
    line-height: 1.6;
    color: var(--dark);
    max-width: 1000px;
    margin: 0 auto;
    padding: 40px 20px;
}

h1, h2, h3 {
    font-family: 'Space Grotesk', sans-serif;
    font-weight: 700;
}

h1 {
    font-size: 3rem;
    margin-bottom: 1rem;
    display: inline-block;
    border-bottom: 12px solid var(--accent);
    line-height: 1;
}

.container {
    display: grid;
    grid-template-columns: 1.5fr 1fr;
    gap: 40px;
}

@media (max-width: 900px) {
    .container {
        grid-template-columns: 1fr;
    }
}

.card {
    background: white;
    border: 3px solid var(--dark);
    border-radius: 8px;
    padding: 30px;
    box-shadow: var(--shadow-offset) var(--shadow-offset) 0 var(--dark);
    margin-bottom: 30px;
}

.card-title {
    background: var(--secondary);
    margin: -30px -30px 20px -30px;
    padding: 20px 30px;
    border-bottom: 3px solid var(--dark);
    font-weight: 800;
    font-size: 1.4rem;
}

form {
    display: grid;
    gap: 20px;
}

.field {
    display: grid;
    gap: 8px;
}

label {
    font-weight: 600;
    font-size: 0.95rem;
}

input, select {
    font-family: inherit;
    font-size: 1rem;
    padding: 12px 16px;
    border: 3px solid var(--dark);
    border-radius: 6px;
    background: white;
    box-shadow: 2px 2px 0 var(--dark);
}

input:focus, select:focus {
    outline: none;
    box-shadow: 4px 4px 0 var(--secondary);
}

button {
    font-family: 'Space Grotesk', sans-serif;
    font-weight: 700;
    font-size: 1.1rem;
    text-transform: uppercase;
    padding: 16px;
    background: var(--primary);
    color: white;
    border: 3px solid var(--dark);
    border-radius: 6px;
    cursor: pointer;
    box-shadow: var(--shadow-offset) var(--shadow-offset) 0 var(--dark);
}

.preview-button {
    background: var(--secondary);
}

.actions {
    display: flex;
    gap: 15px;
}

.printable-btn {
    display: none;
}

.template-preview {
    position: relative;
    min-height: 420px;
    background: white;
    border: 3px dashed var(--dark);
    border-radius: 8px;
    display: flex;
    justify-content: center;
    align-items: center;
    padding: 20px 20px 80px;
}

.preview-placeholder {
    text-align: center;
    color: #888;
}

.preview-controls {
    position: absolute;
    bottom: 15px;
    left: 0;
    right: 0;
    text-align: center;
}

.print-button {
    background: var(--success);
    padding: 10px 20px;
    display: inline-flex;
    align-items: center;
    gap: 8px;
}

.print-button svg {
    width: 16px;
    height: 16px;
}

.htmx-indicator {
    display: none;
    position: absolute;
    top: 50%;
    left: 50%;
    transform: translate(-50%, -50%);
}

.htmx-request .htmx-indicator,
.htmx-request.htmx-indicator {
    display: block;
}

.loading-spinner {
    width: 38px;
    height: 38px;
    border: 3px solid var(--secondary);
    border-top-color: transparent;
    border-radius: 50%;
    animation: spin 1s linear infinite;
}

@keyframes spin {
    to { transform: rotate(360deg); }
}

.api-section pre {
    background: var(--dark);
    color: var(--light);
    padding: 16px;
    border-radius: 6px;
    overflow-x: auto;
    font-size: 0.85rem;
}
"#;
