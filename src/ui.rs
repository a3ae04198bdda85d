use crate::challenge::{CHALLENGE_DAYS, ChallengeState, GOAL_STEPS};

pub fn render_index(state: &ChallengeState) -> String {
    INDEX_HTML
        .replace("{{DAY}}", &state.current_day().to_string())
        .replace("{{DAYS}}", &CHALLENGE_DAYS.to_string())
        .replace("{{GOAL}}", &GOAL_STEPS.to_string())
        .replace("{{STEPS}}", &state.current_steps().to_string())
        .replace("{{PROGRESS}}", &format!("{:.1}", state.current_progress_percent()))
        .replace("{{DEVICE}}", state.device_profile().name())
        .replace("{{EARNED}}", &state.incentive_earned_display())
        .replace("{{MAX}}", &format!("{:.2}", state.incentive_max()))
        .replace("{{CASHBACK_PROGRESS}}", &format!("{:.1}", state.incentive_progress_percent()))
        .replace("{{COMPLETED}}", &state.completed_count().to_string())
        .replace("{{MISSED}}", &state.missed_count().to_string())
        .replace("{{OPEN}}", &state.open_count().to_string())
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>21-Day Step Challenge</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef6ee;
      --bg-2: #bfe3c5;
      --ink: #23302a;
      --accent: #2e9e57;
      --danger: #d9534f;
      --card: rgba(255, 255, 255, 0.9);
      --shadow: 0 24px 60px rgba(35, 48, 42, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #f5fbf4 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(620px, 100%);
      background: var(--card);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 32px;
      display: grid;
      gap: 22px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-size: clamp(1.8rem, 4vw, 2.4rem);
      color: var(--accent);
      margin: 0;
    }

    .row {
      display: flex;
      justify-content: space-between;
      gap: 12px;
      flex-wrap: wrap;
    }

    .devices button {
      flex: 1;
    }

    button {
      border: none;
      border-radius: 14px;
      padding: 12px 18px;
      font: inherit;
      font-weight: 600;
      cursor: pointer;
      background: #e4efe6;
      color: var(--ink);
    }

    button.primary,
    button.selected {
      background: var(--accent);
      color: #fff;
    }

    button.danger {
      background: var(--danger);
      color: #fff;
    }

    button:disabled {
      opacity: 0.45;
      cursor: not-allowed;
    }

    input[type="number"] {
      width: 100%;
      padding: 12px;
      border-radius: 12px;
      border: 1px solid #c9d8cc;
      font: inherit;
    }

    .bar {
      height: 14px;
      border-radius: 999px;
      background: #e4efe6;
      overflow: hidden;
    }

    .bar > span {
      display: block;
      height: 100%;
      background: var(--accent);
      transition: width 240ms ease;
    }

    .actions {
      display: grid;
      gap: 10px;
    }

    .days {
      list-style: none;
      padding: 0;
      margin: 0;
      display: grid;
      grid-template-columns: repeat(3, 1fr);
      gap: 8px;
    }

    .days li {
      border: 1px solid #d6e4d9;
      border-radius: 12px;
      padding: 8px;
      text-align: center;
      font-size: 0.9rem;
      display: grid;
      gap: 4px;
    }

    .days li[data-outcome="met"] {
      border-color: var(--accent);
    }

    .days li[data-outcome="missed"] {
      border-color: var(--danger);
    }

    .muted {
      color: #6a766e;
      font-size: 0.85rem;
    }

    dialog {
      border: none;
      border-radius: 18px;
      box-shadow: var(--shadow);
      padding: 24px;
      width: min(320px, 90vw);
    }

    .status {
      min-height: 1.2em;
      font-size: 0.9rem;
    }

    .status[data-type="error"] {
      color: var(--danger);
    }
  </style>
</head>
<body>
  <main class="app">
    <h1>21-Day Challenge</h1>

    <section>
      <p class="muted">Choose your device:</p>
      <div class="row devices" id="devices"></div>
    </section>

    <section class="row">
      <strong>Day <span id="day">{{DAY}}</span> / {{DAYS}}</strong>
      <strong>Goal: {{GOAL}} steps</strong>
    </section>

    <form id="submit-form" method="post" action="/submit" class="actions">
      <label for="steps">Enter your steps:</label>
      <input id="steps" name="steps" type="number" min="0" value="{{STEPS}}" placeholder="e.g. 7200" />
      <div class="bar"><span id="progress" style="width: {{PROGRESS}}%"></span></div>
      <p class="muted"><span id="steps-label">{{STEPS}}</span> / {{GOAL}} steps</p>

      <p>Cashback: &euro;<span id="earned">{{EARNED}}</span> / &euro;<span id="max">{{MAX}}</span> (<span id="device">{{DEVICE}}</span>)</p>
      <div class="bar"><span id="cashback" style="width: {{CASHBACK_PROGRESS}}%"></span></div>

      <button class="primary" id="submit-btn" type="submit">Confirm day</button>
    </form>

    <section class="actions">
      <form id="skip-form" method="post" action="/skip" class="actions">
        <button class="danger" type="submit">Skip day</button>
      </form>
      <button id="share-btn" type="button">Share on WhatsApp</button>
      <button id="reset-btn" type="button">Start over</button>
    </section>

    <section>
      <div class="row muted">
        <span>Met: <span id="completed">{{COMPLETED}}</span></span>
        <span>Missed: <span id="missed">{{MISSED}}</span></span>
        <span>Open: <span id="open">{{OPEN}}</span></span>
      </div>
      <ul class="days" id="days"></ul>
    </section>

    <div class="status" id="status"></div>
  </main>

  <dialog id="edit-dialog">
    <form method="dialog" id="edit-form" class="actions">
      <strong>Edit day <span id="edit-day"></span></strong>
      <input id="edit-steps" type="number" min="0" placeholder="e.g. 7000" />
      <div class="row">
        <button class="primary" value="confirm" type="submit">Confirm</button>
        <button value="cancel" type="submit">Cancel</button>
      </div>
    </form>
  </dialog>

  <script>
    const $ = (id) => document.getElementById(id);
    const statusEl = $('status');
    const stepsInput = $('steps');
    const submitBtn = $('submit-btn');
    const editDialog = $('edit-dialog');
    let challenge = null;
    let editIndex = null;

    const OUTCOME_LABELS = { met: 'Met', missed: 'Missed', unset: 'Not done yet' };

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const request = async (method, url, body) => {
      const options = { method, headers: {} };
      if (body !== undefined) {
        options.headers['content-type'] = 'application/json';
        options.body = JSON.stringify(body);
      }
      const res = await fetch(url, options);
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      return res.json();
    };

    const renderDays = (history) => {
      $('days').innerHTML = '';
      history.forEach((entry, index) => {
        const li = document.createElement('li');
        li.dataset.outcome = entry.outcome;
        li.innerHTML = `<span>Day ${entry.day}</span><span>${OUTCOME_LABELS[entry.outcome]}</span>`;
        if (entry.steps !== null) {
          li.innerHTML += `<span class="muted">${entry.steps} steps</span>`;
        }
        const edit = document.createElement('button');
        edit.type = 'button';
        edit.textContent = 'Edit';
        edit.addEventListener('click', () => openEdit(index, entry.steps || 0));
        li.appendChild(edit);
        $('days').appendChild(li);
      });
    };

    const render = (data) => {
      challenge = data;
      $('day').textContent = data.current_day;
      if (document.activeElement !== stepsInput) {
        stepsInput.value = data.current_steps;
      }
      $('steps-label').textContent = data.current_steps;
      $('progress').style.width = `${data.progress_percent}%`;
      $('earned').textContent = data.stats.incentive_earned_display;
      $('max').textContent = data.stats.incentive_max.toFixed(2);
      $('device').textContent = data.device;
      $('cashback').style.width = `${data.stats.incentive_progress_percent}%`;
      $('completed').textContent = data.stats.completed;
      $('missed').textContent = data.stats.missed;
      $('open').textContent = data.stats.open;
      submitBtn.disabled = data.current_steps < data.goal;
      submitBtn.textContent = data.current_steps >= data.goal ? 'Day complete!' : 'Confirm day';
      document.querySelectorAll('#devices button').forEach((button) => {
        button.classList.toggle('selected', button.dataset.name === data.device);
      });
      renderDays(data.history);
    };

    const run = (promise) => promise.then(render).catch((err) => setStatus(err.message, 'error'));

    const loadProfiles = async () => {
      const profiles = await request('GET', '/api/profiles');
      $('devices').innerHTML = '';
      profiles.forEach((profile) => {
        const button = document.createElement('button');
        button.type = 'button';
        button.dataset.name = profile.name;
        button.textContent = profile.name;
        button.addEventListener('click', () => run(request('PUT', '/api/profile', { name: profile.name })));
        $('devices').appendChild(button);
      });
    };

    const openEdit = (index, steps) => {
      editIndex = index;
      $('edit-day').textContent = index + 1;
      $('edit-steps').value = steps;
      editDialog.showModal();
    };

    editDialog.addEventListener('close', () => {
      if (editDialog.returnValue === 'confirm' && editIndex !== null) {
        const steps = Number($('edit-steps').value);
        run(request('PUT', `/api/days/${editIndex}`, { steps }));
      }
      editIndex = null;
    });

    stepsInput.addEventListener('input', () => {
      const steps = Number(stepsInput.value);
      if (!Number.isInteger(steps)) {
        return;
      }
      setStatus('', '');
      run(request('PUT', '/api/steps', { steps }));
    });

    $('submit-form').addEventListener('submit', (event) => {
      event.preventDefault();
      run(request('POST', '/api/submit'));
    });

    $('skip-form').addEventListener('submit', (event) => {
      event.preventDefault();
      run(request('POST', '/api/skip'));
    });

    $('reset-btn').addEventListener('click', () => run(request('POST', '/api/reset')));

    $('share-btn').addEventListener('click', () => {
      request('GET', '/api/share')
        .then((share) => window.open(share.url, '_blank'))
        .catch((err) => setStatus(err.message, 'error'));
    });

    loadProfiles()
      .then(() => run(request('GET', '/api/challenge')))
      .catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
