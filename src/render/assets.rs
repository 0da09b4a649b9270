//! Inline stylesheet and toggle script shipped with every page.

pub const STYLESHEET: &str = r#"
:root {
  --primary-color: #2b6cb0;
  --secondary-color: #4299e1;
  --text-color: #2d3748;
  --light-bg: #f7fafc;
  --card-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
  --transition: all 0.3s ease;
}

* {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
  background-color: #f8f9fa;
  color: var(--text-color);
  line-height: 1.6;
  padding: 0;
  margin: 0;
}

.container {
  max-width: 1200px;
  margin: 0 auto;
  padding: 20px;
}

header {
  background: linear-gradient(135deg, var(--primary-color), var(--secondary-color));
  color: white;
  padding: 2rem 0;
  text-align: center;
  margin-bottom: 2rem;
  box-shadow: var(--card-shadow);
}

h1 {
  font-size: 2.5rem;
  margin-bottom: 0.5rem;
}

.subtitle {
  font-size: 1.1rem;
  opacity: 0.9;
}

.repo-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(350px, 1fr));
  gap: 25px;
  padding: 20px;
}

.repo-card {
  background: white;
  border-radius: 10px;
  overflow: hidden;
  box-shadow: var(--card-shadow);
  transition: var(--transition);
  display: flex;
  flex-direction: column;
}

.repo-card:hover {
  transform: translateY(-5px);
  box-shadow: 0 10px 20px rgba(0, 0, 0, 0.15);
}

.card-header {
  display: flex;
  align-items: center;
  padding: 15px;
  background: var(--light-bg);
  border-bottom: 1px solid #e2e8f0;
}

.app-info {
  flex: 1;
}

.app-name {
  font-size: 1.2rem;
  font-weight: 600;
  color: var(--primary-color);
  margin-bottom: 3px;
}

.app-repo {
  font-size: 0.85rem;
  color: #4a5568;
}

.app-desc {
  font-size: 0.8rem;
  color: #4a5568;
  margin-top: 3px;
}

.github-link {
  color: var(--primary-color);
  text-decoration: none;
  font-size: 0.9rem;
  display: flex;
  align-items: center;
}

.github-link:hover {
  text-decoration: underline;
}

.github-icon {
  width: 18px;
  margin-left: 5px;
}

.card-body {
  padding: 20px;
  flex: 1;
}

.release-date {
  display: flex;
  align-items: center;
  color: #718096;
  font-size: 0.9rem;
  margin-bottom: 15px;
}

.date-icon {
  width: 16px;
  margin-left: 5px;
}

.release-notes {
  background: var(--light-bg);
  padding: 12px;
  border-radius: 6px;
  margin-bottom: 15px;
  font-size: 0.95rem;
  line-height: 1.7;
  position: relative;
}

.show-more-btn {
  background: var(--primary-color);
  color: white;
  border: none;
  padding: 5px 10px;
  border-radius: 4px;
  margin-top: 8px;
  cursor: pointer;
  font-size: 0.8rem;
  transition: var(--transition);
}

.show-more-btn:hover {
  background: var(--secondary-color);
}

.downloads-title {
  font-size: 1rem;
  margin-bottom: 10px;
  color: var(--text-color);
}

.download-list {
  display: flex;
  flex-wrap: wrap;
  gap: 8px;
  margin-bottom: 10px;
}

.remaining-files {
  display: flex;
  flex-wrap: wrap;
  gap: 8px;
  width: 100%;
}

.download-btn {
  display: inline-block;
  padding: 6px 12px;
  background: var(--primary-color);
  color: white;
  border-radius: 4px;
  text-decoration: none;
  font-size: 0.85rem;
  transition: var(--transition);
}

.download-btn:hover {
  background: var(--secondary-color);
  transform: translateY(-2px);
}

.show-more-btn.files-btn {
  background: #e2e8f0;
  color: var(--primary-color);
  border: 1px solid #cbd5e0;
  width: 100%;
  text-align: center;
  margin-top: 0;
}

.show-more-btn.files-btn:hover {
  background: #cbd5e0;
}

.error-card {
  background: #fff5f5;
  color: #c53030;
  padding: 20px;
  border-left: 4px solid #c53030;
}

.empty-card {
  background: #f0fff4;
  color: #2f855a;
  padding: 20px;
  border-left: 4px solid #2f855a;
}

footer {
  text-align: center;
  padding: 20px;
  margin-top: 40px;
  color: #718096;
  font-size: 0.9rem;
}

@media (max-width: 768px) {
  .repo-grid {
    grid-template-columns: 1fr;
  }

  h1 {
    font-size: 2rem;
  }
}

"#;

/// Client-side show/hide for long notes and long asset lists. Operates only
/// on the delivered document.
pub const TOGGLE_SCRIPT: &str = r#"
function toggleNotes(btn) {
  const panel = btn.closest('.release-notes');
  const short = panel.querySelector('.notes-short');
  const full = panel.querySelector('.notes-full');
  const expand = btn.dataset.state === 'short';

  short.style.display = expand ? 'none' : 'block';
  full.style.display = expand ? 'block' : 'none';
  btn.textContent = expand ? 'نمایش کمتر' : 'نمایش کامل';
  btn.dataset.state = expand ? 'full' : 'short';
}

function toggleFiles(btn) {
  const remaining = btn.closest('.download-list').querySelector('.remaining-files');
  const expand = btn.dataset.state === 'short';

  remaining.style.display = expand ? 'flex' : 'none';
  btn.textContent = expand
    ? 'نمایش کمتر'
    : 'نمایش ' + remaining.children.length + ' فایل بیشتر';
  btn.dataset.state = expand ? 'full' : 'short';
}
"#;
