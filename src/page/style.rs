// Stylesheet injected once per page. Element ids/classes are prefixed `wydm-`.

pub(super) const STYLE_ID: &str = "wydm-style";

pub(super) const STYLESHEET: &str = r#"
#wydm-root { min-height:100vh; display:flex; flex-direction:column; align-items:center; justify-content:center; padding:16px; position:relative; overflow:hidden; text-align:center; font-family:Georgia, serif; background:linear-gradient(160deg,#ffe4ec,#ffd1dc 60%,#fbc2eb); }
.wydm-bubbles { position:fixed; inset:0; pointer-events:none; overflow:hidden; z-index:0; }
.wydm-bubble { position:absolute; bottom:-80px; border-radius:50%; background:rgba(255,255,255,0.45); box-shadow:inset 0 0 12px rgba(255,182,193,0.8); animation-name:wydm-rise; animation-timing-function:linear; animation-iteration-count:infinite; }
@keyframes wydm-rise { from { transform:translateY(0); opacity:0.8; } to { transform:translateY(-120vh); opacity:0; } }
#wydm-card { position:relative; z-index:20; width:100%; max-width:32rem; padding:2rem; border-radius:3rem; border:4px solid #fff; background:rgba(255,255,255,0.7); box-shadow:0 20px 50px rgba(255,182,193,0.5); display:flex; flex-direction:column; align-items:center; overflow:visible; }
.wydm-question { margin:0 0 1rem 0; padding:1.2rem 2rem; border-radius:999px; background:#fff; border:2px solid #fbcfe8; box-shadow:0 10px 25px rgba(0,0,0,0.15); font-size:1.5rem; font-weight:900; color:#be185d; animation:wydm-wiggle 2s ease-in-out infinite; }
.wydm-photo { position:relative; z-index:10; width:100%; max-width:380px; margin:1rem 0 2.5rem 0; }
.wydm-cover { display:block; width:100%; box-sizing:border-box; aspect-ratio:1/1; object-fit:cover; border-radius:1rem; border:8px solid #fff; box-shadow:0 20px 40px rgba(0,0,0,0.2); }
.wydm-flower { position:absolute; pointer-events:none; user-select:none; }
.wydm-celebration { position:relative; display:inline-block; z-index:10; }
.wydm-row { display:flex; justify-content:center; align-items:center; gap:3rem; width:100%; min-height:100px; }
.wydm-yes { position:relative; z-index:20; padding:1rem 2.5rem; border:none; border-radius:999px; font-size:1.5rem; font-weight:900; color:#fff; cursor:pointer; background:linear-gradient(135deg,#ef4444,#ec4899); box-shadow:0 10px 20px rgba(239,68,68,0.4); }
.wydm-no { z-index:50; padding:1rem 2.5rem; border:2px solid #e5e7eb; border-radius:999px; font-size:1.5rem; font-weight:700; color:#6b7280; background:rgba(255,255,255,0.8); white-space:nowrap; cursor:pointer; user-select:none; box-shadow:0 10px 15px rgba(0,0,0,0.1); transition:all 0.3s cubic-bezier(0.34,1.56,0.64,1); }
.wydm-marker { position:fixed; z-index:100; pointer-events:none; display:none; flex-direction:column; align-items:center; transform:translate(-30%,-30%) scale(1.2); }
.wydm-marker img { width:120px; height:120px; filter:drop-shadow(0 0 15px rgba(0,0,0,0.3)); animation:wydm-wiggle 1s ease-in-out infinite; }
.wydm-marker span { margin-top:0.5rem; padding:0.25rem 0.75rem; border-radius:0.75rem; border:2px solid #facc15; background:#fef9c3; color:#854d0e; font-size:0.875rem; font-weight:900; white-space:nowrap; }
.wydm-accepted { position:relative; z-index:20; overflow:hidden; padding:2.5rem; border-radius:3rem; border:4px solid #fce7f3; background:rgba(255,255,255,0.9); box-shadow:0 25px 50px rgba(0,0,0,0.25); }
.wydm-accepted h1 { font-size:3rem; color:#db2777; animation:wydm-bounce 1s infinite; }
.wydm-accepted img { width:300px; height:300px; object-fit:cover; border-radius:50%; border:8px solid #fff; animation:wydm-wiggle 2s ease-in-out infinite; }
.wydm-accepted p { margin-top:2rem; font-size:1.5rem; font-style:italic; font-weight:600; color:#374151; }
.wydm-heart { pointer-events:none; animation:wydm-float 6s ease-in-out infinite; }
@keyframes wydm-wiggle { 0%,100% { transform:rotate(-2deg); } 50% { transform:rotate(2deg); } }
@keyframes wydm-bounce { 0%,100% { transform:translateY(-8%); } 50% { transform:translateY(0); } }
@keyframes wydm-spin { from { transform:rotate(0deg); } to { transform:rotate(360deg); } }
@keyframes wydm-pulse { 0%,100% { opacity:1; } 50% { opacity:0.5; } }
@keyframes wydm-float { 0%,100% { transform:translateY(0); } 50% { transform:translateY(-20px); } }
"#;
