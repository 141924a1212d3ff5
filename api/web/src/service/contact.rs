use actix_web::{web, HttpRequest, HttpResponse};

use crate::{
    context::ApiWebCtx,
    model::{contact::ContactReqForm, Page},
    session::Flash,
    view::{ContactPage, ThankYouPage},
};

pub fn contact_api(cfg: &mut web::ServiceConfig) {
    cfg.route("/contact", web::get().to(contact_form))
        .route("/contact", web::post().to(submit))
        .route("/thank-you", web::get().to(thank_you));
}

async fn contact_form(ctx: web::Data<ApiWebCtx>, req: HttpRequest) -> HttpResponse {
    Page::ok(&ContactPage::empty(ctx.session().take_flashes(&req)))
}

async fn submit(
    ctx: web::Data<ApiWebCtx>,
    req: HttpRequest,
    data: web::Form<ContactReqForm>,
) -> HttpResponse {
    let input = data.into_inner().into_input();

    let errors = input.errors();
    if !errors.is_empty() {
        let mut form = input;
        form.password.clear();
        form.confirm_password.clear();
        return Page::ok(&ContactPage {
            flashes: ctx.session().take_flashes(&req),
            errors,
            form,
        });
    }

    let session_id = ctx.session().resolve(&req);
    ctx.session().update(&session_id, |session| {
        session.set_contact_submission(input.to_submission());
        session.push_flash(Flash::success(
            "Thank you for your message! I'll get back to you soon.",
        ));
    });

    pf_log::info(
        Some("✉️"),
        format!("[ApiWebServer] Contact form submitted by {}", input.email),
    );

    Page::redirect("/thank-you", Some(ctx.session().cookie(&session_id)))
}

async fn thank_you(ctx: web::Data<ApiWebCtx>, req: HttpRequest) -> HttpResponse {
    let pending = ctx.session().with_existing(&req, |session| {
        session
            .take_contact_submission()
            .map(|submission| (submission, session.take_flashes()))
    });

    match pending.flatten() {
        Some((submission, flashes)) => Page::ok(&ThankYouPage {
            flashes,
            submission,
        }),
        None => {
            let session_id = ctx.session().resolve(&req);
            ctx.session().update(&session_id, |session| {
                session.push_flash(Flash::error(
                    "No form data found. Please submit the contact form first.",
                ))
            });
            Page::redirect("/contact", Some(ctx.session().cookie(&session_id)))
        }
    }
}
