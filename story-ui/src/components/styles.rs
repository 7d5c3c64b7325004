//! Stylesheet injected once by the gallery root.

pub const GALLERY_STYLES: &str = r#"
.stories-screen {
    min-height: 100vh;
    padding: 24px;
    background: #10141c;
    color: #e6e9ef;
    font-family: 'Segoe UI', system-ui, sans-serif;
}

.stories-header {
    display: flex;
    align-items: baseline;
    justify-content: space-between;
    margin-bottom: 16px;
}

.stories-header h1 {
    margin: 0;
    font-size: 1.5rem;
    font-weight: 600;
}

/* Filter bar */

.filter-bar {
    display: flex;
    flex-wrap: wrap;
    gap: 8px;
    align-items: center;
    padding: 12px;
    margin-bottom: 20px;
    background: #1a2030;
    border: 1px solid #2a3246;
    border-radius: 8px;
}

.filter-bar input,
.filter-bar select {
    padding: 6px 10px;
    background: #10141c;
    color: #e6e9ef;
    border: 1px solid #2a3246;
    border-radius: 6px;
    font-size: 0.9rem;
}

.filter-bar input:focus,
.filter-bar select:focus {
    outline: none;
    border-color: #4a7dff;
}

.filter-label {
    font-size: 0.8rem;
    color: #8a93a6;
}

/* Banners */

.banner {
    padding: 10px 14px;
    margin-bottom: 16px;
    border-radius: 6px;
    display: flex;
    justify-content: space-between;
    align-items: center;
    font-size: 0.9rem;
}

.banner-error {
    background: #3a1a20;
    border: 1px solid #7a2a36;
    color: #ff9aa8;
}

.banner-notice {
    background: #1a2a3a;
    border: 1px solid #2a4a6a;
    color: #9ac8ff;
}

.banner-dismiss {
    background: none;
    border: none;
    color: inherit;
    cursor: pointer;
    font-size: 1rem;
    padding: 0 4px;
}

/* Story grid */

.story-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
    gap: 16px;
}

.story-card {
    display: flex;
    flex-direction: column;
    gap: 8px;
    padding: 16px;
    background: #1a2030;
    border: 1px solid #2a3246;
    border-radius: 8px;
    transition: border-color 0.15s;
}

.story-card:hover {
    border-color: #4a7dff;
}

.story-card h3 {
    margin: 0;
    font-size: 1.05rem;
    font-weight: 600;
}

.story-card-meta {
    display: flex;
    gap: 8px;
    font-size: 0.8rem;
    color: #8a93a6;
}

.story-card-excerpt {
    flex: 1;
    font-size: 0.85rem;
    color: #b9c0ce;
    overflow: hidden;
    display: -webkit-box;
    -webkit-line-clamp: 3;
    -webkit-box-orient: vertical;
}

.story-card-actions {
    display: flex;
    gap: 8px;
    margin-top: 4px;
}

.status-badge {
    padding: 2px 8px;
    border-radius: 10px;
    font-size: 0.75rem;
    text-transform: capitalize;
}

.status-draft {
    background: #2a3246;
    color: #b9c0ce;
}

.status-completed {
    background: #1a3a2a;
    color: #8ae0a8;
}

.empty-state {
    padding: 48px;
    text-align: center;
    color: #8a93a6;
}

/* Buttons */

.btn {
    padding: 7px 14px;
    border: 1px solid transparent;
    border-radius: 6px;
    font-size: 0.85rem;
    cursor: pointer;
    transition: filter 0.15s;
}

.btn:hover:not(:disabled) {
    filter: brightness(1.15);
}

.btn:disabled {
    opacity: 0.45;
    cursor: not-allowed;
}

.btn-primary {
    background: #3462d8;
    color: #fff;
}

.btn-danger {
    background: #b23a48;
    color: #fff;
}

.btn-ghost {
    background: transparent;
    border-color: #2a3246;
    color: #b9c0ce;
}

.btn-small {
    padding: 4px 10px;
    font-size: 0.78rem;
}

/* Modal shell */

.modal-scrim {
    position: fixed;
    inset: 0;
    background: rgba(6, 9, 14, 0.72);
    display: flex;
    align-items: center;
    justify-content: center;
    z-index: 50;
}

.modal-panel {
    width: min(560px, 92vw);
    max-height: 84vh;
    overflow-y: auto;
    background: #1a2030;
    border: 1px solid #2a3246;
    border-radius: 10px;
    padding: 20px;
}

.modal-wide {
    width: min(860px, 94vw);
}

.modal-header {
    display: flex;
    justify-content: space-between;
    align-items: center;
    margin-bottom: 14px;
}

.modal-header h2 {
    margin: 0;
    font-size: 1.2rem;
}

.modal-close {
    background: none;
    border: none;
    color: #8a93a6;
    font-size: 1.3rem;
    cursor: pointer;
}

.modal-footer {
    display: flex;
    gap: 8px;
    justify-content: flex-end;
    margin-top: 16px;
}

/* Version history table */

.history-table {
    display: flex;
    flex-direction: column;
    border: 1px solid #2a3246;
    border-radius: 8px;
    overflow: hidden;
}

.history-row {
    display: grid;
    grid-template-columns: 32px 120px 1fr 100px 140px 160px;
    gap: 8px;
    align-items: center;
    padding: 8px 12px;
    border-bottom: 1px solid #232b3d;
    font-size: 0.88rem;
}

.history-row:last-child {
    border-bottom: none;
}

.history-row.selected {
    background: #222c44;
}

.history-head {
    font-size: 0.78rem;
    text-transform: uppercase;
    letter-spacing: 0.04em;
    color: #8a93a6;
    background: #161b28;
}

.history-actions {
    display: flex;
    gap: 6px;
    justify-content: flex-end;
}

/* Full story view */

.full-view {
    max-width: 760px;
    margin: 0 auto;
}

.full-view-field {
    display: flex;
    flex-direction: column;
    gap: 4px;
    margin-bottom: 12px;
}

.full-view-field label {
    font-size: 0.8rem;
    color: #8a93a6;
}

.full-view-field input,
.full-view-field select,
.full-view-field textarea {
    padding: 8px 10px;
    background: #10141c;
    color: #e6e9ef;
    border: 1px solid #2a3246;
    border-radius: 6px;
    font-size: 0.9rem;
    font-family: inherit;
}

.full-view-field textarea {
    resize: vertical;
}

.full-view-content {
    min-height: 320px;
    line-height: 1.5;
}

.full-view-actions {
    display: flex;
    gap: 8px;
    margin-top: 8px;
}

.read-only-note {
    padding: 8px 12px;
    margin-bottom: 12px;
    background: #1a3a2a;
    color: #8ae0a8;
    border-radius: 6px;
    font-size: 0.85rem;
}

/* Compare view */

.compare-view {
    max-width: 860px;
    margin: 0 auto;
}

.compare-body {
    padding: 16px;
    background: #10141c;
    border: 1px solid #2a3246;
    border-radius: 8px;
    font-family: 'Cascadia Code', 'Fira Code', monospace;
    font-size: 0.85rem;
    line-height: 1.5;
    white-space: pre-wrap;
    word-break: break-word;
}

.diff-added {
    background: #143a22;
    color: #8ae0a8;
}

.diff-removed {
    background: #3a161e;
    color: #ff9aa8;
    text-decoration: line-through;
}

.diff-unchanged {
    color: #b9c0ce;
}

.compare-legend {
    display: flex;
    gap: 16px;
    margin: 12px 0;
    font-size: 0.8rem;
    color: #8a93a6;
}

.legend-swatch {
    display: inline-block;
    width: 12px;
    height: 12px;
    border-radius: 3px;
    margin-right: 4px;
    vertical-align: -1px;
}

/* Confirm dialog */

.dialog-scrim {
    position: fixed;
    inset: 0;
    background: rgba(6, 9, 14, 0.72);
    display: flex;
    align-items: center;
    justify-content: center;
    z-index: 60;
}

.dialog-panel {
    width: min(420px, 90vw);
    background: #1a2030;
    border: 1px solid #2a3246;
    border-radius: 10px;
    padding: 20px;
}

.dialog-title {
    margin: 0 0 8px 0;
    font-size: 1.05rem;
}

.dialog-message {
    margin: 0 0 16px 0;
    font-size: 0.9rem;
    color: #b9c0ce;
}

.dialog-actions {
    display: flex;
    gap: 8px;
    justify-content: flex-end;
}
"#;
